/// Instruction sent with every image. The JSON shape it asks for matches
/// `ExtractedProductsSchema`.
pub const PRODUCT_EXTRACTION_PROMPT: &str = r#"You are an expert system designed to extract products from images for an e-commerce application.
Accurately identify every product in the image.
For each product provide:
- "id": a sequential integer starting at 1
- "product_name": the product name
- "color": the product color
- "category": the product category
- "description": a descriptive query to search for the product

Return ONLY a correctly formatted JSON object, no additional text:
{"products":[{"id":1,"product_name":"...","color":"...","category":"...","description":"..."}]}

If the image contains no products, return {"products":[]}."#;
