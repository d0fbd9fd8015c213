use crate::domain::ports::Swimmable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duck {
    breed: String,
}

impl Duck {
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }
}

impl Swimmable for Duck {
    fn swim_message(&self) -> String {
        format!("I'm a {} and I swim with my webbed feet!", self.breed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fish {
    species: String,
}

impl Fish {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }
}

impl Swimmable for Fish {
    fn swim_message(&self) -> String {
        format!("I'm a {} and I swim using fins!", self.species)
    }
}

/// Tagged form of the two swimmers, as it appears in roster files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Swimmer {
    Duck(Duck),
    Fish(Fish),
}

impl Swimmer {
    pub fn kind(&self) -> &'static str {
        match self {
            Swimmer::Duck(_) => "duck",
            Swimmer::Fish(_) => "fish",
        }
    }

    /// Breed or species, whichever this swimmer carries.
    pub fn name(&self) -> &str {
        match self {
            Swimmer::Duck(duck) => duck.breed(),
            Swimmer::Fish(fish) => fish.species(),
        }
    }

    pub fn name_field(&self) -> &'static str {
        match self {
            Swimmer::Duck(_) => "breed",
            Swimmer::Fish(_) => "species",
        }
    }
}

impl Swimmable for Swimmer {
    fn swim_message(&self) -> String {
        match self {
            Swimmer::Duck(duck) => duck.swim_message(),
            Swimmer::Fish(fish) => fish.swim_message(),
        }
    }
}

impl From<Duck> for Swimmer {
    fn from(duck: Duck) -> Self {
        Swimmer::Duck(duck)
    }
}

impl From<Fish> for Swimmer {
    fn from(fish: Fish) -> Self {
        Swimmer::Fish(fish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(swimmer: &dyn Swimmable) -> String {
        let mut buf = Vec::new();
        swimmer.write_swim(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_duck_swims_with_webbed_feet() {
        let duck = Duck::new("Mallard");
        assert_eq!(
            written(&duck),
            "I'm a Mallard and I swim with my webbed feet!\n"
        );
    }

    #[test]
    fn test_fish_swims_using_fins() {
        let fish = Fish::new("Salmon");
        assert_eq!(written(&fish), "I'm a Salmon and I swim using fins!\n");
    }

    #[test]
    fn test_empty_breed_is_kept_verbatim() {
        let duck = Duck::new("");
        assert_eq!(duck.breed(), "");
        assert_eq!(written(&duck), "I'm a  and I swim with my webbed feet!\n");
    }

    #[test]
    fn test_swim_is_idempotent() {
        let fish = Fish::new("Clownfish");
        let first = written(&fish);
        let second = written(&fish);
        assert_eq!(first, second);
    }

    #[test]
    fn test_swimmer_enum_delegates() {
        let duck: Swimmer = Duck::new("Pekin").into();
        let fish: Swimmer = Fish::new("Trout").into();

        assert_eq!(duck.kind(), "duck");
        assert_eq!(duck.name_field(), "breed");
        assert_eq!(fish.name(), "Trout");
        assert_eq!(fish.swim_message(), Fish::new("Trout").swim_message());
    }

    #[test]
    fn test_swimmer_tagged_json() {
        let swimmer = Swimmer::Duck(Duck::new("Mallard"));
        let json = serde_json::to_value(&swimmer).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "duck", "breed": "Mallard"}));

        let parsed: Swimmer =
            serde_json::from_value(serde_json::json!({"kind": "fish", "species": "Tuna"})).unwrap();
        assert_eq!(parsed, Swimmer::Fish(Fish::new("Tuna")));
    }
}
