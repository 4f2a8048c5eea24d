//! Quadratic exchange sort with a temporary-free swap.

use core::ops::BitXorAssign;

/// Integers that can be ordered and swapped with three XORs.
pub trait XorSwap: Copy + Ord + BitXorAssign {}

macro_rules! impl_xor_swap {
    ($($t:ty),* $(,)?) => {
        $(impl XorSwap for $t {})*
    };
}

impl_xor_swap!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Exchange `a` and `b` without a temporary.
///
/// Both are `&mut`, so they can never name the same slot; the classic
/// failure of the idiom (one location XORed with itself ends up zero) is
/// ruled out by the borrow checker.
#[inline]
pub fn xor_swap<T: XorSwap>(a: &mut T, b: &mut T) {
    *a ^= *b;
    *b ^= *a;
    *a ^= *b;
}

/// Sort `values` ascending in place and return how many swaps it took.
///
/// Every pair `i < j` is compared once and swapped when out of order, so
/// after pass `i` the slot holds the minimum of `values[i..]`. Not stable.
pub fn exchange_sort<T: XorSwap>(values: &mut [T]) -> usize {
    let mut swaps = 0;
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            let (head, tail) = values.split_at_mut(j);
            if head[i] > tail[0] {
                xor_swap(&mut head[i], &mut tail[0]);
                swaps += 1;
            }
        }
    }
    swaps
}
