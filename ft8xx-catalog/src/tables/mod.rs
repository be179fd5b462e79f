//! Built-in catalogs transcribed from the vendor datasheets
//!
//! Each table is validated in a `const` item below, so a duplicated slot or a
//! clashing address stops the build instead of shipping a wrong map.

mod bt81x;
mod ft800;
mod ft81x;

pub use bt81x::BT81X;
pub use ft800::FT800;
pub use ft81x::FT81X;

use crate::catalog::Catalog;
use crate::variant::Variant;

/// All built-in catalogs, in [`Variant::ALL`] order
pub const BUILTIN: [Catalog<'static>; Variant::COUNT] = [FT800, FT81X, BT81X];

/// Built-in catalog for `variant`
pub const fn catalog(variant: Variant) -> Catalog<'static> {
    match variant {
        Variant::Ft800 => FT800,
        Variant::Ft81x => FT81X,
        Variant::Bt81x => BT81X,
    }
}

const _: () = {
    let mut i = 0;
    while i < BUILTIN.len() {
        if BUILTIN[i].variant().index() != i {
            panic!("built-in catalogs out of variant order");
        }
        if BUILTIN[i].validate().is_err() {
            panic!("built-in catalog is inconsistent");
        }
        i += 1;
    }
};
