//# The domain model the presentation layer renders
pub mod product;
