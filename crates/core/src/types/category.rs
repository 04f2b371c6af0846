//! Product category enumeration.

use serde::{Deserialize, Serialize};

/// The closed set of product categories carried by the store.
///
/// The storefront UI additionally offers an "All" filter; that is a
/// presentation concern, not a category a product can belong to, so it has
/// no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Sneakers,
    Shoes,
    Apparel,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::Sneakers, Self::Shoes, Self::Apparel];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sneakers => write!(f, "Sneakers"),
            Self::Shoes => write!(f, "Shoes"),
            Self::Apparel => write!(f, "Apparel"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sneakers" => Ok(Self::Sneakers),
            "Shoes" => Ok(Self::Shoes),
            "Apparel" => Ok(Self::Apparel),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}
