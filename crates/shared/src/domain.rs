use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Stable topping identifier. Travels on the wire as a decimal string (`"1"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToppingId(pub u8);

impl fmt::Display for ToppingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ToppingId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ToppingId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim()
            .parse::<u8>()
            .map(ToppingId)
            .map_err(|_| de::Error::custom(format!("invalid topping id: {raw}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: ToppingId,
    pub name: &'static str,
}

/// Reference list, in display and payload order.
pub const TOPPINGS: [Topping; 5] = [
    Topping {
        id: ToppingId(1),
        name: "Pepperoni",
    },
    Topping {
        id: ToppingId(2),
        name: "Green Peppers",
    },
    Topping {
        id: ToppingId(3),
        name: "Pineapple",
    },
    Topping {
        id: ToppingId(4),
        name: "Mushrooms",
    },
    Topping {
        id: ToppingId(5),
        name: "Ham",
    },
];

pub fn topping_by_id(id: ToppingId) -> Option<&'static Topping> {
    TOPPINGS.iter().find(|topping| topping.id == id)
}

pub fn topping_by_name(name: &str) -> Result<&'static Topping, DomainError> {
    TOPPINGS
        .iter()
        .find(|topping| topping.name == name)
        .ok_or_else(|| DomainError::UnknownTopping(name.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PizzaSize {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl PizzaSize {
    pub const ALL: [PizzaSize; 3] = [PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large];

    /// Form/wire code for the size.
    pub fn code(self) -> &'static str {
        match self {
            PizzaSize::Small => "S",
            PizzaSize::Medium => "M",
            PizzaSize::Large => "L",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        match code {
            "S" => Ok(PizzaSize::Small),
            "M" => Ok(PizzaSize::Medium),
            "L" => Ok(PizzaSize::Large),
            other => Err(DomainError::UnknownSize(other.to_string())),
        }
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
