pub mod city;
pub mod participant;
pub mod record;
pub mod saved_user;
