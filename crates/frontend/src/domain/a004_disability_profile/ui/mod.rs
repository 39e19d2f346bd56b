pub mod profile_form;
