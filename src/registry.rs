//! The catalogue of named scoring systems.
//!
//! Built once, in a fixed order, and never modified afterwards. Lookups by
//! name are exact; lookups by slug match [`ScoringSystem::slug`].

use std::sync::LazyLock;

use crate::scoring::{
    Bangkok, BangkokPike, Base3, CDiplo, CDiploNamur, Carnage, Detour09, DrawSize, Haight, Janus,
    ManorCon, Maxonian, OpenMindTheGap, OpenTribute, RankedClassic, ScoringSystem, SoloOrBust,
    SouthernSun, SumOfSquares, Tribute, Vulcan, Whipping, WorldClassic, YourDrawSize,
};

/// An ordered, immutable set of scoring systems with unique names.
pub struct Registry {
    systems: Vec<Box<dyn ScoringSystem>>,
}

impl Registry {
    /// Every supported system, in catalogue order.
    pub fn standard() -> Self {
        let systems: Vec<Box<dyn ScoringSystem>> = vec![
            Box::new(SoloOrBust),
            Box::new(DrawSize),
            Box::new(CDiplo::cdiplo_100()),
            Box::new(CDiplo::cdiplo_80()),
            Box::new(CDiploNamur),
            Box::new(SumOfSquares),
            Box::new(Carnage::dead_equal()),
            Box::new(Carnage::elimination_order()),
            Box::new(Carnage::centre_count()),
            Box::new(Carnage::carnage_2023()),
            Box::new(Janus),
            Box::new(Tribute),
            Box::new(OpenTribute),
            Box::new(WorldClassic::world_classic()),
            Box::new(WorldClassic::summer_classic()),
            Box::new(ManorCon::manorcon()),
            Box::new(ManorCon::original()),
            Box::new(ManorCon::v2()),
            Box::new(Bangkok),
            Box::new(BangkokPike),
            Box::new(Base3),
            Box::new(Detour09),
            Box::new(Haight),
            Box::new(Maxonian::maxonian()),
            Box::new(Maxonian::seven_eleven()),
            Box::new(OpenMindTheGap),
            Box::new(RankedClassic),
            Box::new(SouthernSun),
            Box::new(Whipping::whipping()),
            Box::new(YourDrawSize::short_games()),
            Box::new(YourDrawSize::unlimited_games()),
            Box::new(Vulcan),
        ];
        Registry { systems }
    }

    /// The system with exactly this name.
    pub fn find(&self, name: &str) -> Option<&dyn ScoringSystem> {
        self.iter().find(|s| s.name() == name)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&dyn ScoringSystem> {
        self.iter().find(|s| s.slug() == slug)
    }

    /// Looks a system up by name, falling back to its slug.
    pub fn lookup(&self, key: &str) -> Option<&dyn ScoringSystem> {
        self.find(key).or_else(|| self.find_by_slug(key))
    }

    /// System names in registry order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|s| s.name()).collect()
    }

    /// The systems themselves, for callers that need a slice.
    pub fn systems(&self) -> &[Box<dyn ScoringSystem>] {
        &self.systems
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ScoringSystem> + '_ {
        self.systems.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::standard);

/// The process-wide standard registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
