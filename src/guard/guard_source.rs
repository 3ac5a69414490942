use uuid::Uuid;

/// Source of the 128-bit ids include guards are derived from.
pub trait GuardSource {
    fn next_id(&self) -> Uuid;
}

pub struct RandomGuardSource;

impl GuardSource for RandomGuardSource {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
pub struct FixedGuardSource {
    id: Uuid,
}

#[cfg(test)]
impl FixedGuardSource {
    pub fn new(id: Uuid) -> FixedGuardSource {
        FixedGuardSource { id }
    }
}

#[cfg(test)]
impl GuardSource for FixedGuardSource {
    fn next_id(&self) -> Uuid {
        self.id
    }
}
