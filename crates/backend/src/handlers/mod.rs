pub mod a001_housing_facility;
pub mod a002_care_home;
pub mod a003_donation;
pub mod a004_disability_profile;
