use crate::activation::ActivationContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualitative readiness tier derived from the raw total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReadinessProfileKey {
    #[serde(rename = "p1_critical")]
    Critical,
    #[serde(rename = "p2_fragmented")]
    Fragmented,
    #[serde(rename = "p3_structured")]
    Structured,
    #[serde(rename = "p4_integrated")]
    Integrated,
}

impl ReadinessProfileKey {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Critical,
            Self::Fragmented,
            Self::Structured,
            Self::Integrated,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "p1_critical",
            Self::Fragmented => "p2_fragmented",
            Self::Structured => "p3_structured",
            Self::Integrated => "p4_integrated",
        }
    }
}

impl fmt::Display for ReadinessProfileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown readiness profile '{0}'")]
pub struct UnknownProfileKey(pub String);

impl FromStr for ReadinessProfileKey {
    type Err = UnknownProfileKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|key| key.as_str() == value.trim())
            .ok_or_else(|| UnknownProfileKey(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Red,
    Orange,
    Yellow,
    Green,
}

/// Static narrative content for one readiness tier.
#[derive(Debug, Serialize)]
pub struct ReadinessProfile {
    pub key: ReadinessProfileKey,
    pub emoji: &'static str,
    pub color_tag: ColorTag,
    pub title: &'static str,
    pub label: &'static str,
    pub score_band_label: &'static str,
    #[serde(skip)]
    build_summary: fn(&ActivationContext) -> String,
    pub upsides: &'static [&'static str],
    pub downsides: &'static [&'static str],
    pub future_outlook: &'static [&'static str],
    pub unlocks: &'static [&'static str],
    pub operational_priority: &'static str,
    pub primary_cta_label: &'static str,
    pub primary_cta_description: &'static str,
    pub secondary_cta_label: &'static str,
    pub secondary_cta_description: &'static str,
}

impl PartialEq for ReadinessProfile {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl ReadinessProfile {
    pub fn summary(&self, ctx: &ActivationContext) -> String {
        (self.build_summary)(ctx)
    }
}

pub fn readiness_profile(key: ReadinessProfileKey) -> &'static ReadinessProfile {
    match key {
        ReadinessProfileKey::Critical => &PROFILES[0],
        ReadinessProfileKey::Fragmented => &PROFILES[1],
        ReadinessProfileKey::Structured => &PROFILES[2],
        ReadinessProfileKey::Integrated => &PROFILES[3],
    }
}

pub fn readiness_profiles() -> &'static [ReadinessProfile] {
    &PROFILES
}

const FREE_VERSION_CTA: &str = "Try the free version of Control 360°";

fn critical_summary(ctx: &ActivationContext) -> String {
    format!(
        "{}, based on your answers, {} is currently operating in a **Critical Risk Zone** for day-to-day operations. For a {} business in {}, this means that key flows like inventory, order management, warehousing and multi-channel sales are still highly manual, fragmented and exposed to daily risks.",
        ctx.contact_name, ctx.company_name, ctx.business_type, ctx.country
    )
}

fn fragmented_summary(ctx: &ActivationContext) -> String {
    format!(
        "{}, {} has moved beyond a simple setup and is now dealing with visible complexity. For a {} business in {}, this means you have some systems and processes, but they are not yet fully integrated, which makes the operation fragmented and reactive.",
        ctx.contact_name, ctx.company_name, ctx.business_type, ctx.country
    )
}

fn structured_summary(ctx: &ActivationContext) -> String {
    format!(
        "{}, {} has built a solid operational foundation for a {} business in {}. You have defined processes, reasonable inventory control and some automation in place, but there is still significant room to improve visibility, automation depth and scalability.",
        ctx.contact_name, ctx.company_name, ctx.business_type, ctx.country
    )
}

fn integrated_summary(ctx: &ActivationContext) -> String {
    format!(
        "{}, {} already operates with a mature, integrated setup for a {} business in {}. Systems, warehouses and channels are connected, processes are defined and a good level of automation is in place – putting you above industry average in several areas.",
        ctx.contact_name, ctx.company_name, ctx.business_type, ctx.country
    )
}

static PROFILES: [ReadinessProfile; 4] = [
    ReadinessProfile {
        key: ReadinessProfileKey::Critical,
        emoji: "🟥",
        color_tag: ColorTag::Red,
        title: "Critical Risk Zone – High Operational Friction",
        label: "Critical Risk Zone",
        score_band_label: "Total score: 0–11 out of 45",
        build_summary: critical_summary,
        upsides: &[
            "You are able to operate with basic tools such as spreadsheets or single systems.",
            "You can still adapt quickly because processes are not yet rigid.",
            "Decisions are often made close to the day-to-day operations.",
        ],
        downsides: &[
            "Low inventory accuracy typically causes lost sales, higher safety stock, and wasted time searching or correcting errors. Studies show improving inventory accuracy can increase sales by 4–8%.",
            "Stockouts are likely a recurring issue. Research indicates that more than 80% of businesses lose customers due to stockouts over time.",
            "Manual fulfillment and weak process control usually lead to slower, less predictable delivery, which reduces customer satisfaction and repeat purchases in e-commerce.",
        ],
        future_outlook: &[
            "Customer churn is likely to increase due to inconsistent delivery and product availability.",
            "Scaling volume (more orders, new channels, extra warehouses) will add stress and errors faster than revenue.",
            "Management decisions will continue to rely on partial or outdated data, making planning and forecasting difficult.",
        ],
        unlocks: &[
            "Reducing repetitive manual warehouse tasks and error rates can improve productivity and lower labor cost per order.",
            "Real-time inventory visibility across channels reduces overselling, stockouts and emergency purchasing.",
            "Faster, more accurate fulfillment increases customer satisfaction and repeat purchases, particularly in e-commerce.",
        ],
        operational_priority: "Stabilize & Connect Basics",
        primary_cta_label: "Book a Stabilization & Control Workshop",
        primary_cta_description: "We map your current flows and design a 90-day plan to reduce errors and stockouts using Control 360°.",
        secondary_cta_label: FREE_VERSION_CTA,
        secondary_cta_description: "Start with a focused setup on inventory and order control to stabilize your core operations.",
    },
    ReadinessProfile {
        key: ReadinessProfileKey::Fragmented,
        emoji: "🟧",
        color_tag: ColorTag::Orange,
        title: "Fragmented & Reactive – Growing but Difficult to Control",
        label: "Fragmented & Reactive",
        score_band_label: "Total score: 12–22 out of 45",
        build_summary: fragmented_summary,
        upsides: &[
            "You already use tools for orders, inventory or warehousing.",
            "Parts of your operation run efficiently, especially when volume is stable.",
            "You can handle normal demand reasonably well.",
        ],
        downsides: &[
            "Data is still siloed. Manual transfers between systems increase the risk of errors and slow decisions.",
            "Inventory accuracy is 'good enough' in some areas, but inconsistencies still cause stockouts or overstock in others, affecting cash flow and margin.",
            "Fulfillment speed and reliability are variable; customers in some channels experience delays or lack of status updates.",
        ],
        future_outlook: &[
            "Operational complexity will increase as order volume, channels or warehouses grow.",
            "Cost per order and error correction effort will likely rise faster than revenue.",
            "Competitors with better integrated omnichannel operations will offer more reliable availability and smoother experiences, winning repeat customers.",
        ],
        unlocks: &[
            "A more integrated omnichannel setup allows customers to see reliable stock, order smoothly and receive consistent updates. This is linked to higher conversion and 15–30% higher spend from omnichannel customers versus single-channel.",
            "Standardized warehouse processes and selective automation can cut error rates and handling time, improving capacity without proportional headcount growth.",
        ],
        operational_priority: "Connect & Streamline",
        primary_cta_label: "Schedule a Process & Integration Scan",
        primary_cta_description: "See how your tools and flows can be unified into one Control 360° environment.",
        secondary_cta_label: FREE_VERSION_CTA,
        secondary_cta_description: "Start working towards integrated operations with a guided configuration.",
    },
    ReadinessProfile {
        key: ReadinessProfileKey::Structured,
        emoji: "🟨",
        color_tag: ColorTag::Yellow,
        title: "Structured but Under-Optimized – Strong Foundation, Untapped Potential",
        label: "Structured but Under-Optimized",
        score_band_label: "Total score: 23–33 out of 45",
        build_summary: structured_summary,
        upsides: &[
            "Many daily operations run reliably with fewer disruptions than in early-stage setups.",
            "Warehouse and distribution flows are mostly structured; staff know the procedures.",
            "Data exists for decisions, even if it is not yet fully real-time or centralized.",
        ],
        downsides: &[
            "Some manual steps remain in cross-system workflows, which still consume time and introduce occasional errors.",
            "Reporting may require manual consolidation from multiple tools, reducing the speed of decision-making.",
            "As volume grows or new channels/warehouses are added, current processes might struggle to keep the same service level and cost structure.",
        ],
        future_outlook: &[
            "The business can keep operating, but efficiency gains will plateau.",
            "Competitors who push automation, real-time analytics and advanced inventory accuracy will gain cost and speed advantages.",
            "Opportunities for better margin, lower working capital and higher customer lifetime value may remain unused.",
        ],
        unlocks: &[
            "Deeper warehouse and process automation can significantly improve throughput and reduce per-order labor costs while maintaining or improving accuracy.",
            "Improving inventory record accuracy toward best-in-class levels can open 4–8% additional sales opportunity and reduce waste and write-offs.",
            "More advanced, unified analytics across channels, warehouses and customers can lead to better assortment decisions and improved profitability.",
        ],
        operational_priority: "Optimize & Scale",
        primary_cta_label: "Book a Scaling & Optimization Session",
        primary_cta_description: "Align your current setup with a Control 360° architecture for the next growth phase.",
        secondary_cta_label: FREE_VERSION_CTA,
        secondary_cta_description: "Use advanced automation and reporting features to unlock the next level of performance.",
    },
    ReadinessProfile {
        key: ReadinessProfileKey::Integrated,
        emoji: "🟩",
        color_tag: ColorTag::Green,
        title: "Integrated & Scalable – Strong Operations, Ready to Innovate",
        label: "Integrated & Scalable",
        score_band_label: "Total score: 34–45 out of 45",
        build_summary: integrated_summary,
        upsides: &[
            "Inventory, warehouse and order flows are relatively synchronized and predictable.",
            "Customers experience reliable delivery and communication, which supports satisfaction and repeat purchases.",
            "Your team has a clear structure; less time is spent firefighting and more on planned work.",
        ],
        downsides: &[
            "Advanced scenarios such as peak demand, complex omnichannel or new territories may still require manual intervention.",
            "You may not yet fully leverage AI-driven planning, forecasting or decision support, which more advanced players are beginning to deploy.",
        ],
        future_outlook: &[
            "You are likely to remain competitive in the short term, but the gap between 'good' and 'best-in-class' will widen as more companies invest in automation, AI and integrated omnichannel experiences.",
            "This may limit your ability to capture the most profitable growth opportunities or operate with the lowest possible cost per order.",
        ],
        unlocks: &[
            "Applying more advanced automation and AI to forecasting, slotting, routing and staffing can further increase capacity and reduce operational cost.",
            "Deeper omnichannel integration (e.g. click-and-collect, ship-from-store, unified payments) can raise average customer spend, loyalty and lifetime value.",
        ],
        operational_priority: "Innovate & Differentiate",
        primary_cta_label: "Book a Control 360° Innovation Session",
        primary_cta_description: "Explore AI-powered automation and advanced omnichannel flows on top of your existing structure.",
        secondary_cta_label: FREE_VERSION_CTA,
        secondary_cta_description: "Use Control 360° as your central layer to move from strong to best-in-class operations.",
    },
];
