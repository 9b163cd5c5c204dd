//! Various unsorted geometrical and logical operators.

pub use self::isometry_ops::IsometryOps;
pub use self::spin_lock::{SpinLock, SpinLockGuard};

mod isometry_ops;
mod spin_lock;
