use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn steam<'a>(&'a mut self) -> SteamFixtures<'a> {
        SteamFixtures { setup: self }
    }
}

pub struct SteamFixtures<'a> {
    pub setup: &'a mut TestContext,
}
