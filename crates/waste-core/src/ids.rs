//! Strongly typed, zero-cost identifier wrappers.
//!
//! Zone, station and truck IDs are indices into the `World` arena kept by
//! `waste-fleet`; event handles carry them instead of references so that a
//! truck can be named by the fleet list and by any number of pending events
//! at once.  `EventId` is the agenda's insertion sequence number and doubles
//! as the identity used for cancellation.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $prefix:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a collection zone in the world arena.
    pub struct ZoneId(u16) => "zone#";
}

typed_id! {
    /// Index of a transfer station in the world arena.
    pub struct StationId(u16) => "station#";
}

typed_id! {
    /// Index of a small collection truck in the world arena.
    pub struct TruckId(u32) => "truck#";
}

typed_id! {
    /// Monotonic serial of a large (landfill) truck.  Large trucks are not
    /// kept in an arena: the station owns the one it is loading and the
    /// departure event owns it afterwards.
    pub struct LargeTruckId(u32) => "G";
}

typed_id! {
    /// Handle of a scheduled event.  Unique per agenda, never reused.
    pub struct EventId(u64) => "ev#";
}
