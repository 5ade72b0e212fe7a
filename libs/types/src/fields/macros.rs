//! Field Group Generation Macros
//!
//! Provides the `field_group!` macro for declaring presence-vector field groups
//! and `presence_bits!` for their bit-position enumerations.
//!
//! ## Purpose
//!
//! Every optional field follows the same rules: the setter validates before
//! storing, the presence bit follows the stored value, encode and decode visit
//! fields in declared order gated by their bits. Generating this from one
//! declaration keeps ~50 message types from drifting apart.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! field_group! {
//!     /// Commanded platform velocity in global coordinates
//!     pub struct GlobalVector [presence: PresenceLayout::fixed(1, 0x1F)] {
//!         speed: scaled(0, SPEED),
//!         elevation: scaled(1, ELEVATION),
//!         heading: scaled(2, HEADING),
//!         roll: scaled(3, ROLL),
//!         pitch: scaled(4, PITCH),
//!     }
//! }
//!
//! let mut vector = GlobalVector::new();
//! vector.set_speed(12.5)?;           // validated, sets bit 0
//! assert_eq!(vector.speed(), Some(12.5));
//! ```

/// Generate a field group struct with accessors and a `FieldGroup` implementation
///
/// Fields are written in declaration order. Bits of optional fields must be
/// declared in ascending order so the wire order matches the bit order.
#[macro_export]
macro_rules! field_group {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $([presence: $layout:expr])? {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $kind:ident($($arg:tt)*)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $($field: $crate::__field_type!($kind($($arg)*)),)+
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $crate::__field_accessors!($(#[$field_meta])* $field: $kind($($arg)*));
            )+
        }

        impl $crate::fields::FieldGroup for $name {
            const LAYOUT: $crate::fields::PresenceLayout = $crate::__presence_layout!($($layout)?);

            fn presence(&self) -> u32 {
                let mut presence = 0u32;
                $(presence |= $crate::__field_presence!(self.$field, $kind($($arg)*));)+
                presence
            }

            fn encoded_size(&self) -> usize {
                let mut size = 0usize;
                $(size += $crate::__field_size!(self.$field, $kind($($arg)*));)+
                size
            }

            fn encode(&self, stream: &mut $crate::Stream) -> usize {
                let mut written = 0usize;
                $(written += $crate::__field_encode!(self.$field, stream, $kind($($arg)*));)+
                written
            }

            fn decode(
                &mut self,
                stream: &mut $crate::Stream,
                presence: u32,
            ) -> $crate::JausResult<usize> {
                let _ = presence;
                let mut consumed = 0usize;
                $(consumed += $crate::__field_decode!(self.$field, stream, presence, $kind($($arg)*));)+
                Ok(consumed)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __presence_layout {
    () => {
        $crate::fields::PresenceLayout::Absent
    };
    ($layout:expr) => {
        $layout
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_type {
    (scaled($bit:literal, $limit:expr)) => { ::core::option::Option<f64> };
    (optional($bit:literal, $ty:ty)) => { ::core::option::Option<$ty> };
    (group($ty:ty, $offset:literal)) => { $ty };
    (required($ty:ty)) => { $ty };
    (required_scaled($limit:expr)) => { f64 };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_accessors {
    ($(#[$m:meta])* $field:ident: scaled($bit:literal, $limit:expr)) => {
        $(#[$m])*
        pub fn $field(&self) -> ::core::option::Option<f64> {
            self.$field
        }

        $crate::paste::paste! {
            /// Store the value if it lies within the field's limits
            pub fn [<set_ $field>](&mut self, value: f64) -> $crate::JausResult<()> {
                self.$field = ::core::option::Option::Some($limit.validate(value)?);
                Ok(())
            }

            /// Drop the value and clear its presence bit
            pub fn [<clear_ $field>](&mut self) {
                self.$field = ::core::option::Option::None;
            }
        }
    };
    ($(#[$m:meta])* $field:ident: optional($bit:literal, $ty:ty)) => {
        $(#[$m])*
        pub fn $field(&self) -> ::core::option::Option<$ty> {
            self.$field
        }

        $crate::paste::paste! {
            pub fn [<set_ $field>](&mut self, value: $ty) {
                self.$field = ::core::option::Option::Some(value);
            }

            /// Drop the value and clear its presence bit
            pub fn [<clear_ $field>](&mut self) {
                self.$field = ::core::option::Option::None;
            }
        }
    };
    ($(#[$m:meta])* $field:ident: group($ty:ty, $offset:literal)) => {
        $(#[$m])*
        pub fn $field(&self) -> &$ty {
            &self.$field
        }

        $crate::paste::paste! {
            pub fn [<$field _mut>](&mut self) -> &mut $ty {
                &mut self.$field
            }
        }
    };
    ($(#[$m:meta])* $field:ident: required($ty:ty)) => {
        $(#[$m])*
        pub fn $field(&self) -> $ty {
            self.$field
        }

        $crate::paste::paste! {
            pub fn [<set_ $field>](&mut self, value: $ty) {
                self.$field = value;
            }
        }
    };
    ($(#[$m:meta])* $field:ident: required_scaled($limit:expr)) => {
        $(#[$m])*
        pub fn $field(&self) -> f64 {
            self.$field
        }

        $crate::paste::paste! {
            /// Store the value if it lies within the field's limits
            pub fn [<set_ $field>](&mut self, value: f64) -> $crate::JausResult<()> {
                self.$field = $limit.validate(value)?;
                Ok(())
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_presence {
    ($target:expr, scaled($bit:literal, $limit:expr)) => {
        if $target.is_some() { 1u32 << $bit } else { 0 }
    };
    ($target:expr, optional($bit:literal, $ty:ty)) => {
        if $target.is_some() { 1u32 << $bit } else { 0 }
    };
    ($target:expr, group($ty:ty, $offset:literal)) => {
        $crate::fields::FieldGroup::presence(&$target) << $offset
    };
    ($target:expr, required($ty:ty)) => {
        0
    };
    ($target:expr, required_scaled($limit:expr)) => {
        0
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_size {
    ($target:expr, scaled($bit:literal, $limit:expr)) => {
        if $target.is_some() { $limit.size() } else { 0 }
    };
    ($target:expr, optional($bit:literal, $ty:ty)) => {
        if $target.is_some() { <$ty as $crate::WireValue>::SIZE } else { 0 }
    };
    ($target:expr, group($ty:ty, $offset:literal)) => {
        $crate::fields::FieldGroup::encoded_size(&$target)
    };
    ($target:expr, required($ty:ty)) => {
        <$ty as $crate::WireValue>::SIZE
    };
    ($target:expr, required_scaled($limit:expr)) => {
        $limit.size()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_encode {
    ($target:expr, $stream:ident, scaled($bit:literal, $limit:expr)) => {
        match $target {
            ::core::option::Option::Some(value) => $limit.write($stream, value),
            ::core::option::Option::None => 0,
        }
    };
    ($target:expr, $stream:ident, optional($bit:literal, $ty:ty)) => {
        match $target {
            ::core::option::Option::Some(value) => $stream.write::<$ty>(value),
            ::core::option::Option::None => 0,
        }
    };
    ($target:expr, $stream:ident, group($ty:ty, $offset:literal)) => {
        $crate::fields::FieldGroup::encode(&$target, $stream)
    };
    ($target:expr, $stream:ident, required($ty:ty)) => {
        $stream.write::<$ty>($target)
    };
    ($target:expr, $stream:ident, required_scaled($limit:expr)) => {
        $limit.write($stream, $target)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_decode {
    ($target:expr, $stream:ident, $presence:ident, scaled($bit:literal, $limit:expr)) => {
        if $crate::is_bit_set($presence, $bit) {
            $target = ::core::option::Option::Some($limit.read($stream)?);
            $limit.size()
        } else {
            0
        }
    };
    ($target:expr, $stream:ident, $presence:ident, optional($bit:literal, $ty:ty)) => {
        if $crate::is_bit_set($presence, $bit) {
            $target = ::core::option::Option::Some($stream.read::<$ty>()?);
            <$ty as $crate::WireValue>::SIZE
        } else {
            0
        }
    };
    ($target:expr, $stream:ident, $presence:ident, group($ty:ty, $offset:literal)) => {
        $crate::fields::FieldGroup::decode(&mut $target, $stream, $presence >> $offset)?
    };
    ($target:expr, $stream:ident, $presence:ident, required($ty:ty)) => {{
        $target = $stream.read::<$ty>()?;
        <$ty as $crate::WireValue>::SIZE
    }};
    ($target:expr, $stream:ident, $presence:ident, required_scaled($limit:expr)) => {{
        $target = $limit.read($stream)?;
        $limit.size()
    }};
}

/// Generate a presence-vector bit enumeration
///
/// Each variant's discriminant is its bit position; `mask()` gives the bit's
/// value within the vector.
#[macro_export]
macro_rules! presence_bits {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $bit:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(u32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant = $bit),+
        }

        impl $name {
            /// Every bit in ascending order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn bit(self) -> u32 {
                self as u32
            }

            pub const fn mask(self) -> u32 {
                1 << (self as u32)
            }

            /// Combined mask of `bits`
            pub fn mask_of(bits: &[$name]) -> u32 {
                bits.iter().fold(0, |mask, bit| mask | bit.mask())
            }
        }

        impl ::core::convert::TryFrom<u32> for $name {
            type Error = u32;

            fn try_from(bit: u32) -> ::core::result::Result<Self, u32> {
                Self::ALL.iter().copied().find(|b| b.bit() == bit).ok_or(bit)
            }
        }
    };
}
