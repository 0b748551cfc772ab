//! Walkthrough sample routines
//!
//! Small, deliberately simple routines that mirror the demo sources under
//! `demos/`. The `hello` binary and the lint fixtures exercise the same
//! shapes; keeping runnable versions here makes their contracts testable.

/// Conditional arithmetic helper.
///
/// Returns `z` truncated toward zero when `x` is positive; otherwise
/// `x * 2 * y` when `y` is non-positive and `z` is at least `100.0`;
/// otherwise `0`.
pub fn add(x: i32, y: i32, z: f32) -> i32 {
    if x > 0 {
        z as i32
    } else if y <= 0 && z >= 100.0 {
        x * 2 * y
    } else {
        0
    }
}

/// Length of a null-terminated byte sequence.
///
/// Scans from index zero and returns the number of bytes preceding the
/// first `0` byte.
///
/// # Panics
///
/// Panics if `seq` contains no terminator; a terminator is part of the
/// contract of a null-terminated sequence.
pub fn strlength(seq: &[u8]) -> usize {
    let mut i = 0;
    while seq[i] != 0 {
        i += 1;
    }
    i
}

/// Two independent integer axes with individual and combined setters.
///
/// Holds whatever was last assigned per axis; no validation, no coupling
/// between the axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Create a point at the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal value.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Vertical value.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Assign the horizontal value.
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    /// Assign the vertical value.
    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    /// Assign both values at once.
    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}
