//! Macros for declaring relations between dimensions.

/// Declares multiplication/division relations between dimensions.
///
/// Every line produces the compile-time [`Integration`](crate::Integration) and
/// [`Derivation`](crate::Derivation) impls *and* a row of the runtime `RELATIONS` table, so both views stay in sync.
///
/// - `A * B => C;` is commutative: `A × B`, `B × A`, `C / B` and `C / A` are all defined.
/// - `A ^ 2 => C;` squares a dimension: `A × A` and `C / A`.
///
/// The invocation defines `pub const RELATIONS: &[Relation]` in the calling module. Pass it to
/// [`Registry::with_relations`](crate::Registry::with_relations) so runtime quantities follow the same relations.
///
/// ```rust,ignore
/// relations! {
///     Length ^ 2 => Area;
///     Velocity * Time => Length;
/// }
/// ```
#[macro_export]
macro_rules! relations {
    (@table [$($rows:expr,)*]) => {
        /// Runtime table of every relation declared in this module.
        pub const RELATIONS: &[$crate::Relation] = &[$($rows,)*];
    };

    (@table [$($rows:expr,)*] $a:ident ^ 2 => $c:ident; $($rest:tt)*) => {
        impl $crate::Integration<$a> for $a {
            type Output = $c;
        }

        impl $crate::Derivation<$a> for $c {
            type Output = $a;
        }

        $crate::relations!(@table [$($rows,)* $crate::Relation::square::<$a, $c>(),] $($rest)*);
    };

    (@table [$($rows:expr,)*] $a:ident * $b:ident => $c:ident; $($rest:tt)*) => {
        impl $crate::Integration<$b> for $a {
            type Output = $c;
        }

        impl $crate::Integration<$a> for $b {
            type Output = $c;
        }

        impl $crate::Derivation<$b> for $c {
            type Output = $a;
        }

        impl $crate::Derivation<$a> for $c {
            type Output = $b;
        }

        $crate::relations!(@table [$($rows,)* $crate::Relation::product::<$a, $b, $c>(),] $($rest)*);
    };

    ($($body:tt)*) => {
        $crate::relations!(@table [] $($body)*);
    };
}
