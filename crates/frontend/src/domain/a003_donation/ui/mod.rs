pub mod donation_section;
