pub mod clinicorp;
