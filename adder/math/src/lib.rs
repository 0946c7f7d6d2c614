mod adder;
mod error;
mod number;
mod number_const;
#[cfg(test)]
mod test_utils;

pub use {adder::*, error::*, number::*, number_const::*};
