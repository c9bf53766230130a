pub mod about;
pub mod careers;
pub mod contact;
pub mod experience;
pub mod home;
pub mod not_found;
pub mod sectors;
pub mod services;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    home::configure(cfg);
    about::configure(cfg);
    sectors::configure(cfg);
    services::configure(cfg);
    experience::configure(cfg);
    careers::configure(cfg);
    contact::configure(cfg);
}
