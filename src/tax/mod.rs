//! Tax calculation modules

pub mod gst;
pub mod hsn;

pub use gst::*;
pub use hsn::*;
