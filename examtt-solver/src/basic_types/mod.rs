mod assignment;
mod schedule;
mod trail;

pub(crate) use assignment::Assignment;
pub use schedule::Schedule;
pub(crate) use trail::Trail;
