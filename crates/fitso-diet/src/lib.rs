mod calendar;
mod error;
mod filter;
mod plan;
mod status;

pub use calendar::*;
pub use error::*;
pub use filter::*;
pub use plan::*;
pub use status::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;
        mod table;

        pub use command::*;
        pub use query::*;
    }
}
