use crate::TestContext;

pub mod data;

impl TestContext {
    pub fn film<'a>(&'a mut self) -> FilmFixtures<'a> {
        FilmFixtures { setup: self }
    }
}

pub struct FilmFixtures<'a> {
    pub setup: &'a mut TestContext,
}
