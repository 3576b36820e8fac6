mod capture;
mod dds;
mod gpio;
mod scope;
