use katalog_database::entities::{CategoryModel, NewCategory};

use crate::TestServer;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SampleCategory {
    Shoes,
    Hats,
    Bags,
}

impl SampleCategory {
    pub fn title(&self) -> &'static str {
        match self {
            SampleCategory::Shoes => "Shoes",
            SampleCategory::Hats => "Hats",
            SampleCategory::Bags => "Bags",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SampleCategory::Shoes => "Sneakers, boots and sandals.",
            SampleCategory::Hats => "Caps, beanies and fedoras.",
            SampleCategory::Bags => "Backpacks, totes and suitcases.",
        }
    }
}


/// Inserts the category straight into the repository. If `image_file_name` is set,
/// a matching blob is written to the public disk as well.
pub async fn insert_sample_category(
    server: &TestServer,
    category: SampleCategory,
    image_file_name: Option<&str>,
) -> CategoryModel {
    if let Some(image_file_name) = image_file_name {
        server
            .write_category_image(image_file_name, b"sample image")
            .await;
    }

    server.repository().insert(NewCategory {
        title: category.title().to_string(),
        description: category.description().to_string(),
        image: image_file_name.map(str::to_string),
        status: true,
    })
}
