pub mod getter;
pub mod observer;
pub mod pusher;

pub use getter::Getter;
pub use observer::Observer;
pub use pusher::Pusher;
