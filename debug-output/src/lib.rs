pub mod debug_message;
pub use debug_message::print_debug;
