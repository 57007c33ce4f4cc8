#![forbid(unsafe_code)]
pub mod bench;
pub mod event;
pub mod memory;
pub mod message;
pub mod null;
pub mod sink;
pub mod template;
pub mod value;

pub use bench::*;
pub use event::*;
pub use log::{Level, LevelFilter};
pub use memory::*;
pub use null::*;
pub use sink::*;
pub use value::*;
