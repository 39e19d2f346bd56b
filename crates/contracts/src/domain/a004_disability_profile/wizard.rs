//! Three-step flow of the jobs profile form.

use super::aggregate::DisabilityProfileDto;

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 3;

/// Step 1: language and disability type. Step 2: background story.
/// Step 3: work experience and resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileWizard {
    step: u8,
    pub profile: DisabilityProfileDto,
}

impl Default for ProfileWizard {
    fn default() -> Self {
        Self {
            step: FIRST_STEP,
            profile: DisabilityProfileDto::default(),
        }
    }
}

impl ProfileWizard {
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_first(&self) -> bool {
        self.step == FIRST_STEP
    }

    pub fn is_last(&self) -> bool {
        self.step == LAST_STEP
    }

    /// Advance one step. Leaving step 1 needs a disability type.
    pub fn next(&mut self) -> Result<(), String> {
        if self.step == FIRST_STEP {
            self.profile.validate()?;
        }
        self.step = (self.step + 1).min(LAST_STEP);
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = self.step.saturating_sub(1).max(FIRST_STEP);
    }

    /// Answers ready to send with "Complete Profile"
    pub fn completed(&self) -> Result<DisabilityProfileDto, String> {
        self.profile.validate()?;
        Ok(self.profile.clone())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::disability_type::DisabilityType;

    #[test]
    fn test_first_step_requires_type() {
        let mut wizard = ProfileWizard::default();
        assert!(wizard.next().is_err());
        assert_eq!(wizard.step(), 1);

        wizard.profile.disability_type = Some(DisabilityType::HearingImpairment);
        wizard.next().unwrap();
        assert_eq!(wizard.step(), 2);
    }

    #[test]
    fn test_steps_are_clamped() {
        let mut wizard = ProfileWizard::default();
        wizard.back();
        assert!(wizard.is_first());

        wizard.profile.disability_type = Some(DisabilityType::Other);
        for _ in 0..5 {
            wizard.next().unwrap();
        }
        assert!(wizard.is_last());
        assert_eq!(wizard.step(), 3);

        wizard.back();
        assert_eq!(wizard.step(), 2);
    }

    #[test]
    fn test_completed_returns_answers() {
        let mut wizard = ProfileWizard::default();
        assert!(wizard.completed().is_err());
        wizard.profile.disability_type = Some(DisabilityType::PhysicalMobility);
        wizard.profile.has_resume = true;
        let dto = wizard.completed().unwrap();
        assert!(dto.has_resume);

        wizard.reset();
        assert_eq!(wizard, ProfileWizard::default());
    }
}
