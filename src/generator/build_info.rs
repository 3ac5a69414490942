use crate::guard::guard_token::GuardToken;
use crate::header::render::render;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildInfo {
    pub guard: GuardToken,
    pub date: String,
    pub commit: String,
}

impl BuildInfo {
    pub fn render(&self) -> String {
        render(&self.guard, &self.date, &self.commit)
    }
}
