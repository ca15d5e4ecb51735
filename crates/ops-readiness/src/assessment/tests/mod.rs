mod common;
mod normalize;
mod profiles;
