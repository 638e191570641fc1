use crate::domain::model::OrderId;
use crate::domain::ports::OrderGenerator;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const DEFAULT_FIRST_NAMES: &[&str] = &[
    "Olivia", "Liam", "Emma", "Noah", "Ava", "Elijah", "Sophia", "James", "Mia", "Lucas",
    "Amelia", "Henry", "Harper", "Theodore", "Evelyn", "Mateo", "Aria", "Levi", "Chloe", "Ezra",
];

pub const DEFAULT_LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore",
    "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark",
];

pub const DEFAULT_COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Ltd"];

pub const DEFAULT_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1600267185393-e158a98703de?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&w=800",
    "https://picsum.photos/id/1005/800/600",
    "https://picsum.photos/id/1011/800/600",
    "https://picsum.photos/id/1025/800/600",
    "https://picsum.photos/id/1027/800/600",
    "https://picsum.photos/id/1062/800/600",
];

/// Random but plausible names and companies; photos cycle through a fixed pool.
#[derive(Debug, Clone)]
pub struct FakeDataGenerator {
    rng: StdRng,
    first_names: Vec<String>,
    last_names: Vec<String>,
    company_suffixes: Vec<String>,
    images: Vec<String>,
}

impl FakeDataGenerator {
    /// 指定種子時產生可重現的資料
    pub fn new(rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            first_names: to_owned(DEFAULT_FIRST_NAMES),
            last_names: to_owned(DEFAULT_LAST_NAMES),
            company_suffixes: to_owned(DEFAULT_COMPANY_SUFFIXES),
            images: to_owned(DEFAULT_IMAGES),
        }
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        if !images.is_empty() {
            self.images = images;
        }
        self
    }

    pub fn with_first_names(mut self, names: Vec<String>) -> Self {
        if !names.is_empty() {
            self.first_names = names;
        }
        self
    }

    pub fn with_last_names(mut self, names: Vec<String>) -> Self {
        if !names.is_empty() {
            self.last_names = names;
        }
        self
    }

    pub fn with_company_suffixes(mut self, suffixes: Vec<String>) -> Self {
        if !suffixes.is_empty() {
            self.company_suffixes = suffixes;
        }
        self
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    fn pick(rng: &mut StdRng, pool: &[String]) -> String {
        pool.choose(rng).cloned().unwrap_or_default()
    }

    fn last_name(&mut self) -> String {
        Self::pick(&mut self.rng, &self.last_names)
    }
}

impl OrderGenerator for FakeDataGenerator {
    fn name(&mut self, _id: OrderId) -> String {
        let first = Self::pick(&mut self.rng, &self.first_names);
        let last = self.last_name();
        format!("{} {}", first, last)
    }

    fn company_name(&mut self, _id: OrderId) -> String {
        match self.rng.gen_range(0..3) {
            0 => {
                let last = self.last_name();
                let suffix = Self::pick(&mut self.rng, &self.company_suffixes);
                format!("{} {}", last, suffix)
            }
            1 => format!("{}-{}", self.last_name(), self.last_name()),
            _ => format!(
                "{}, {} and {}",
                self.last_name(),
                self.last_name(),
                self.last_name()
            ),
        }
    }

    fn photo(&mut self, id: OrderId) -> String {
        if self.images.is_empty() {
            return String::new();
        }
        let index = (id % self.images.len() as u64) as usize;
        self.images[index].clone()
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
