use serde::{Deserialize, Serialize};

/// Operational area covered by three consecutive catalog questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    InventoryVisibility,
    OrderFulfillment,
    WarehouseOperations,
    MultichannelIntegration,
    AutomationScalability,
}

impl Dimension {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::InventoryVisibility,
            Self::OrderFulfillment,
            Self::WarehouseOperations,
            Self::MultichannelIntegration,
            Self::AutomationScalability,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InventoryVisibility => "Inventory Visibility",
            Self::OrderFulfillment => "Order Fulfillment",
            Self::WarehouseOperations => "Warehouse Ops",
            Self::MultichannelIntegration => "Multi-channel Integration",
            Self::AutomationScalability => "Automation & Scalability",
        }
    }

    pub const fn section(self) -> u8 {
        match self {
            Self::InventoryVisibility => 1,
            Self::OrderFulfillment => 2,
            Self::WarehouseOperations => 3,
            Self::MultichannelIntegration => 4,
            Self::AutomationScalability => 5,
        }
    }

    pub const fn section_title(self) -> &'static str {
        match self {
            Self::InventoryVisibility => "Inventory Visibility & SKU Management",
            Self::OrderFulfillment => "Order Management & Fulfillment",
            Self::WarehouseOperations => "Warehouse Operations & Internal Processes",
            Self::MultichannelIntegration => "Multi-Channel & Systems Integration",
            Self::AutomationScalability => "Automation, Planning & Scalability",
        }
    }
}

/// Ordinal answer value, worst (0) to best (3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub const MAX: Self = Self(3);

    /// Accepts only values in `0..=3`.
    pub fn new(value: i64) -> Option<Self> {
        match value {
            0..=3 => Some(Self(value as u8)),
            _ => None,
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub id: &'static str,
    pub label: &'static str,
    pub value: AnswerValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub section: u8,
    pub dimension: Dimension,
    pub text: &'static str,
    pub options: [AnswerOption; OPTIONS_PER_QUESTION],
}

pub const OPTIONS_PER_QUESTION: usize = 4;
pub const QUESTIONS_PER_DIMENSION: usize = 3;

const fn option(id: &'static str, label: &'static str, value: u8) -> AnswerOption {
    AnswerOption {
        id,
        label,
        value: AnswerValue(value),
    }
}

static QUESTIONS: [Question; 15] = [
    // Section 1: Inventory Visibility & SKU Management
    Question {
        id: "q1",
        section: 1,
        dimension: Dimension::InventoryVisibility,
        text: "How do you currently track stock levels across all channels/locations?",
        options: [
            option("q1o1", "Fully manual (spreadsheets, paper)", 0),
            option("q1o2", "Semi-manual (tool + manual adjustments)", 1),
            option("q1o3", "Mostly automated (one system, some gaps)", 2),
            option("q1o4", "Fully automated, real-time sync across all channels", 3),
        ],
    },
    Question {
        id: "q2",
        section: 1,
        dimension: Dimension::InventoryVisibility,
        text: "How accurate is your inventory count at any given time?",
        options: [
            option("q2o1", "Often inaccurate", 0),
            option("q2o2", "Sometimes inaccurate", 1),
            option("q2o3", "Mostly accurate", 2),
            option("q2o4", "Consistently accurate", 3),
        ],
    },
    Question {
        id: "q3",
        section: 1,
        dimension: Dimension::InventoryVisibility,
        text: "How easy is it to check stock availability across warehouses, stores, or fulfillment partners?",
        options: [
            option("q3o1", "Very difficult / unclear", 0),
            option("q3o2", "Possible, but takes effort or manual checks", 1),
            option("q3o3", "Mostly clear", 2),
            option("q3o4", "Fully visible in one central place", 3),
        ],
    },

    // Section 2: Order Management & Fulfillment
    Question {
        id: "q4",
        section: 2,
        dimension: Dimension::OrderFulfillment,
        text: "How are B2B or B2C orders processed today?",
        options: [
            option("q4o1", "Manual picking, packing, and updating", 0),
            option("q4o2", "Some automation, but still manual steps", 1),
            option("q4o3", "Mostly automated with structured workflows", 2),
            option("q4o4", "Fully automated with clear routing and updates", 3),
        ],
    },
    Question {
        id: "q5",
        section: 2,
        dimension: Dimension::OrderFulfillment,
        text: "How often do order errors occur (wrong item, wrong qty, wrong location, missing scan)?",
        options: [
            option("q5o1", "Very often", 0),
            option("q5o2", "Occasionally", 1),
            option("q5o3", "Rarely", 2),
            option("q5o4", "Almost never", 3),
        ],
    },
    Question {
        id: "q6",
        section: 2,
        dimension: Dimension::OrderFulfillment,
        text: "How consistent is your order fulfillment speed?",
        options: [
            option("q6o1", "Highly inconsistent or slow", 0),
            option("q6o2", "Moderate, depends on workload", 1),
            option("q6o3", "Generally fast", 2),
            option("q6o4", "Very fast and stable", 3),
        ],
    },

    // Section 3: Warehouse Operations & Internal Processes
    Question {
        id: "q7",
        section: 3,
        dimension: Dimension::WarehouseOperations,
        text: "How organized and efficient are your warehouse operations?",
        options: [
            option("q7o1", "Unstructured / manual / hard to track", 0),
            option("q7o2", "Some processes exist but not standardized", 1),
            option("q7o3", "Well structured with clear workflows", 2),
            option("q7o4", "Highly optimized with clear zones & automation", 3),
        ],
    },
    Question {
        id: "q8",
        section: 3,
        dimension: Dimension::WarehouseOperations,
        text: "How well does your team follow scanning, picking, packing, and movement procedures?",
        options: [
            option("q8o1", "No consistent process", 0),
            option("q8o2", "Some adherence, but gaps", 1),
            option("q8o3", "Mostly consistent", 2),
            option("q8o4", "Fully consistent & trackable", 3),
        ],
    },
    Question {
        id: "q9",
        section: 3,
        dimension: Dimension::WarehouseOperations,
        text: "How often do you experience delays or bottlenecks due to manual tasks inside the warehouse?",
        options: [
            option("q9o1", "Daily", 0),
            option("q9o2", "Weekly", 1),
            option("q9o3", "Monthly", 2),
            option("q9o4", "Rarely", 3),
        ],
    },

    // Section 4: Multi-Channel & Systems Integration
    Question {
        id: "q10",
        section: 4,
        dimension: Dimension::MultichannelIntegration,
        text: "How many systems/tools are used to manage sales, stock, orders, and customers?",
        options: [
            option("q10o1", "5+ disconnected systems", 0),
            option("q10o2", "3–4 systems, partially connected", 1),
            option("q10o3", "1–2 systems, mostly connected", 2),
            option("q10o4", "1 fully integrated environment", 3),
        ],
    },
    Question {
        id: "q11",
        section: 4,
        dimension: Dimension::MultichannelIntegration,
        text: "How well do your systems synchronize orders, inventory, customer data, and reporting?",
        options: [
            option("q11o1", "Not synchronized", 0),
            option("q11o2", "Partially synchronized", 1),
            option("q11o3", "Mostly synchronized", 2),
            option("q11o4", "Fully synchronized real-time", 3),
        ],
    },
    Question {
        id: "q12",
        section: 4,
        dimension: Dimension::MultichannelIntegration,
        text: "How often do you manually transfer data (copy/paste, exports, spreadsheets)?",
        options: [
            option("q12o1", "Constantly", 0),
            option("q12o2", "Often", 1),
            option("q12o3", "Sometimes", 2),
            option("q12o4", "Rarely / never", 3),
        ],
    },

    // Section 5: Automation, Planning & Scalability
    Question {
        id: "q13",
        section: 5,
        dimension: Dimension::AutomationScalability,
        text: "How many operational processes are currently automated?",
        options: [
            option("q13o1", "None", 0),
            option("q13o2", "Some", 1),
            option("q13o3", "Many", 2),
            option("q13o4", "Most / nearly all", 3),
        ],
    },
    Question {
        id: "q14",
        section: 5,
        dimension: Dimension::AutomationScalability,
        text: "How do you handle reporting and operational decision-making?",
        options: [
            option("q14o1", "Manual reports, no central view", 0),
            option("q14o2", "Basic reports, not real-time", 1),
            option("q14o3", "Good dashboards, partly connected", 2),
            option("q14o4", "Real-time automated dashboards for all key flows", 3),
        ],
    },
    Question {
        id: "q15",
        section: 5,
        dimension: Dimension::AutomationScalability,
        text: "How prepared is your business to scale (double order volume, more warehouses, new channels)?",
        options: [
            option("q15o1", "Not prepared", 0),
            option("q15o2", "Somewhat prepared", 1),
            option("q15o3", "Mostly prepared", 2),
            option("q15o4", "Fully prepared", 3),
        ],
    },
];

/// The fixed 15-question catalog in section order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|question| question.id == id)
}

pub fn questions_for(dimension: Dimension) -> impl Iterator<Item = &'static Question> {
    QUESTIONS
        .iter()
        .filter(move |question| question.dimension == dimension)
}

/// Highest reachable raw total (every question answered with the best option).
pub fn max_raw_total() -> u32 {
    QUESTIONS.len() as u32 * u32::from(AnswerValue::MAX.get())
}
