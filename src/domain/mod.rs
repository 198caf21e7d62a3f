pub mod quote;

pub use quote::{last_price_key, last_quote_key, Quote};
