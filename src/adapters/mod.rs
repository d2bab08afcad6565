// Adapters layer: concrete consoles behind the domain's Console port.

pub mod console;

pub use console::{MemoryConsole, StdoutConsole};
