//! Test modules for the catalog service
