//! Zero-Cost Safety Macros
//!
//! The solver sweeps run K full-grid passes per step; bounds checks in those
//! inner loops are pure overhead once the index arithmetic is proven.
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use fluidium_engine::fast;
//!
//! let idx = 2;
//!
//! let arr = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! // Read: fast!(slice, [index])
//! let val = *fast!(arr, [idx]);
//! assert_eq!(val, 3.0);
//!
//! let mut density = vec![0.0f32; 5];
//! // Write: fast!(slice, [index] = value)
//! fast!(density, [idx] = 1.0);
//! assert_eq!(density[idx], 1.0);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
