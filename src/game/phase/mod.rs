mod round;
mod score;

pub use self::round::*;
pub use self::score::*;
