pub mod city;
pub mod disability_type;
pub mod facility_requirement;
pub mod language;
