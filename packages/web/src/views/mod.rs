mod app_layout;
pub use app_layout::AppLayout;

mod product_list;
pub use product_list::ProductList;

mod create_product;
pub use create_product::CreateProduct;

mod edit_product;
pub use edit_product::EditProduct;

mod not_found;
pub use not_found::NotFound;
