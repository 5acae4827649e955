mod activity_log;
mod hackathon;
mod team;
