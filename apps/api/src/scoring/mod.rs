// Score derivation: percentage, cross-scale normalization, radar chart, tiers.
// Everything here is synchronous and total; handlers call it directly.

pub mod handlers;
pub mod normalize;
pub mod radar;
pub mod tier;
