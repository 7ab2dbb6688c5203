use crate::core::{Demo, PatternKind, Result, Transcript};
use std::any::Any;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FighterType {
    Soldier = 1,
    Elf = 2,
    Dwarf = 3,
}

pub trait Fighter: Any + Send + Sync {
    fn id(&self) -> FighterType;
    fn fight(&self) -> String;
    fn clone_fighter(&self) -> Box<dyn Fighter>;
    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Soldier {
    pub gun_hit: u32,
    pub defense: u32,
    pub speed: u32,
}

impl Soldier {
    pub fn new(gun_hit: u32, defense: u32, speed: u32) -> Self {
        Self {
            gun_hit,
            defense,
            speed,
        }
    }
}

impl Fighter for Soldier {
    fn id(&self) -> FighterType {
        FighterType::Soldier
    }

    fn fight(&self) -> String {
        format!(
            "Soldier fights with gun hit {}, defense {}, speed {}",
            self.gun_hit, self.defense, self.speed
        )
    }

    fn clone_fighter(&self) -> Box<dyn Fighter> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Elf {
    pub arrow_hit: u32,
    pub magic: u32,
    pub speed: u32,
}

impl Elf {
    pub fn new(arrow_hit: u32, magic: u32, speed: u32) -> Self {
        Self {
            arrow_hit,
            magic,
            speed,
        }
    }
}

impl Fighter for Elf {
    fn id(&self) -> FighterType {
        FighterType::Elf
    }

    fn fight(&self) -> String {
        format!(
            "Elf fights with arrow hit {}, magic {}, speed {}",
            self.arrow_hit, self.magic, self.speed
        )
    }

    fn clone_fighter(&self) -> Box<dyn Fighter> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dwarf {
    pub axe_hit: u32,
    pub defense: u32,
    pub speed: u32,
}

impl Dwarf {
    pub fn new(axe_hit: u32, defense: u32, speed: u32) -> Self {
        Self {
            axe_hit,
            defense,
            speed,
        }
    }
}

impl Fighter for Dwarf {
    fn id(&self) -> FighterType {
        FighterType::Dwarf
    }

    fn fight(&self) -> String {
        format!(
            "Dwarf fights with axe hit {}, defense {}, speed {}",
            self.axe_hit, self.defense, self.speed
        )
    }

    fn clone_fighter(&self) -> Box<dyn Fighter> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Default)]
pub struct PrototypeRegistry {
    prototypes: HashMap<FighterType, Box<dyn Fighter>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, prototype: Box<dyn Fighter>) {
        self.prototypes.insert(prototype.id(), prototype);
    }

    pub fn contains(&self, kind: FighterType) -> bool {
        self.prototypes.contains_key(&kind)
    }

    pub fn spawn(&self, kind: FighterType) -> Option<Box<dyn Fighter>> {
        self.prototypes.get(&kind).map(|p| p.clone_fighter())
    }

    /// Typed clone; `None` when missing or registered under a different concrete type.
    pub fn spawn_as<T: Fighter + Clone>(&self, kind: FighterType) -> Option<T> {
        self.prototypes
            .get(&kind)
            .and_then(|p| p.as_any().downcast_ref::<T>())
            .cloned()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkExperience {
    pub work_date: String,
    pub company: String,
}

/// Deep clone: the copy owns its own work experience.
#[derive(Debug, Clone, PartialEq)]
pub struct Resume {
    name: String,
    sex: String,
    age: String,
    work_experience: WorkExperience,
}

impl Resume {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sex: String::new(),
            age: String::new(),
            work_experience: WorkExperience::default(),
        }
    }

    pub fn set_personal_info(&mut self, sex: impl Into<String>, age: impl Into<String>) {
        self.sex = sex.into();
        self.age = age.into();
    }

    pub fn set_work_experience(&mut self, time_area: impl Into<String>, company: impl Into<String>) {
        self.work_experience.work_date = time_area.into();
        self.work_experience.company = company.into();
    }

    pub fn display(&self) -> [String; 2] {
        [
            format!("{} {} {}", self.name, self.sex, self.age),
            format!(
                "Work experience: {} {}",
                self.work_experience.work_date, self.work_experience.company
            ),
        ]
    }
}

fn seeded_registry() -> PrototypeRegistry {
    let mut registry = PrototypeRegistry::new();
    registry.register(Box::new(Dwarf::new(50, 40, 15)));
    registry.register(Box::new(Soldier::new(30, 20, 5)));
    registry
}

pub struct PrototypeDemo;

#[async_trait::async_trait]
impl Demo for PrototypeDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Prototype
    }

    async fn run(&self) -> Result<Transcript> {
        let mut transcript = Transcript::new(self.kind());
        let mut registry = seeded_registry();

        if let Some(mut soldier) = registry.spawn_as::<Soldier>(FighterType::Soldier) {
            soldier.gun_hit = 45;
            transcript.line(soldier.fight());
        }

        match registry.spawn(FighterType::Elf) {
            Some(elf) => transcript.line(elf.fight()),
            None => {
                tracing::debug!("No elf prototype cached, creating one");
                let elf = Elf::new(15, 30, 3);
                transcript.line(elf.fight());
                registry.register(Box::new(elf));
            }
        }

        if let Some(mut elf) = registry.spawn_as::<Elf>(FighterType::Elf) {
            elf.arrow_hit = 35;
            transcript.line(elf.fight());
        }

        match registry.spawn(FighterType::Dwarf) {
            Some(dwarf) => transcript.line(dwarf.fight()),
            None => {
                let dwarf = Dwarf::new(50, 40, 15);
                transcript.line(dwarf.fight());
                registry.register(Box::new(dwarf));
            }
        }

        let mut original = Resume::new("marsonshine");
        original.set_personal_info("male", "29");
        original.set_work_experience("2015-2020", "Company A");
        let mut copy = original.clone();
        copy.set_work_experience("2020-2024", "Company B");
        transcript.extend(original.display());
        transcript.extend(copy.display());

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_returns_independent_copy() {
        let registry = seeded_registry();
        let mut soldier = registry.spawn_as::<Soldier>(FighterType::Soldier).unwrap();
        soldier.gun_hit = 99;

        let fresh = registry.spawn_as::<Soldier>(FighterType::Soldier).unwrap();
        assert_eq!(fresh.gun_hit, 30);
    }

    #[test]
    fn test_spawn_as_wrong_type_is_none() {
        let registry = seeded_registry();
        assert!(registry.spawn_as::<Elf>(FighterType::Soldier).is_none());
        assert!(registry.spawn(FighterType::Elf).is_none());
        assert!(!registry.contains(FighterType::Elf));
    }

    #[test]
    fn test_resume_clone_is_deep() {
        let mut original = Resume::new("a");
        original.set_work_experience("2010", "X");
        let mut copy = original.clone();
        copy.set_work_experience("2020", "Y");
        assert_eq!(original.display()[1], "Work experience: 2010 X");
        assert_eq!(copy.display()[1], "Work experience: 2020 Y");
    }

    #[tokio::test]
    async fn test_demo_transcript() {
        let transcript = PrototypeDemo.run().await.unwrap();
        assert_eq!(
            transcript.lines[..4],
            [
                "Soldier fights with gun hit 45, defense 20, speed 5",
                "Elf fights with arrow hit 15, magic 30, speed 3",
                "Elf fights with arrow hit 35, magic 30, speed 3",
                "Dwarf fights with axe hit 50, defense 40, speed 15",
            ]
        );
        assert_eq!(transcript.lines[5], "Work experience: 2015-2020 Company A");
        assert_eq!(transcript.lines[7], "Work experience: 2020-2024 Company B");
    }
}
