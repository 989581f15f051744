//! Channel identity.
//!
//! The module has exactly two switch channels.  Making the identifier an
//! enum keeps an out-of-range channel unrepresentable inside the core;
//! integers coming from the outside world go through [`ChannelId::from_index`].

use core::fmt;

/// One of the two independently switchable relay channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    One,
    Two,
}

impl ChannelId {
    /// Both channels, in index order.
    pub const ALL: [ChannelId; 2] = [ChannelId::One, ChannelId::Two];

    /// Map a 1-based external index (request names, button ids) to a channel.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    /// 1-based index as used in request and notification names.
    pub const fn index(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// 0-based slot into per-channel arrays.
    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "switch{}", self.index())
    }
}
