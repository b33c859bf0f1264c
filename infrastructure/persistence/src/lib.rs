pub mod extraction {
    pub mod repository;
}
