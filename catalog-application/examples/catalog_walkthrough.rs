/// 资源服务示例
/// 演示基于内存存储的五类操作：创建、列表、读取、更新/补丁与删除
use anyhow::Result as AnyResult;
use catalog_application::{CustomerService, ProductService};
use catalog_domain::catalog::{
    Customer, CustomerDraft, Product, ProductCategory, ProductDraft, ProductFilter, ProductPatch,
};
use catalog_domain::entity::Entity;
use catalog_domain::persist::MemoryRecordStore;
use catalog_domain::value_object::Version;
use rust_decimal::Decimal;
use std::sync::Arc;

fn draft(name: &str, category: ProductCategory, price: &str, quantity: u32) -> ProductDraft {
    ProductDraft::builder()
        .name(name.to_string())
        .category(category)
        .code("0631234200036".to_string())
        .price(price.parse::<Decimal>().expect("valid price"))
        .quantity_on_hand(quantity)
        .build()
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    tracing_subscriber::fmt().init();

    // ========================================================================
    // 装配：共享内存存储 + 按资源特化的服务
    // ========================================================================

    let products = Arc::new(MemoryRecordStore::<Product>::new());
    let product_service = ProductService::new(products.clone());

    let customers = Arc::new(MemoryRecordStore::<Customer>::new());
    let customer_service = CustomerService::new(customers);

    // ========================================================================
    // 创建与列表
    // ========================================================================

    for (name, category, price, quantity) in [
        ("Galaxy Cat IPA", ProductCategory::Ipa, "9.56", 122),
        ("Mango Bobs", ProductCategory::Ale, "5.99", 400),
        ("Vanilla Java Porter", ProductCategory::Porter, "7.25", 12),
        ("Snozzberry ipa", ProductCategory::Ipa, "8.10", 80),
    ] {
        let created = product_service
            .create(draft(name, category, price, quantity))
            .await?;
        println!(
            "created {} [{}] {} @ {}",
            created.name,
            created.category,
            created.id(),
            created.version()
        );
    }

    let page = product_service
        .list(
            ProductFilter::builder().name("ipa".to_string()).build(),
            Some(1),
            Some(10),
            None,
        )
        .await?;
    println!(
        "name filter \"ipa\": {} of {} record(s)",
        page.len(),
        page.total
    );

    // 隐藏库存数量的投影只作用于返回窗口
    let concealed = product_service
        .list(ProductFilter::default(), None, None, Some(false))
        .await?;
    println!(
        "inventory concealed: {:?}",
        concealed
            .items
            .iter()
            .map(|p| p.quantity_on_hand)
            .collect::<Vec<_>>()
    );

    // ========================================================================
    // 补丁与乐观并发
    // ========================================================================

    let target = page.items.first().expect("seeded above").clone();
    let patched = product_service
        .patch_by_id(
            target.id(),
            ProductPatch::builder().price("10.49".parse::<Decimal>()?).build(),
            Some(target.version()),
        )
        .await?
        .expect("record exists");
    println!("patched {} -> {}", patched.name, patched.version());

    // 携带过期版本的写入被并发守卫拒绝
    let conflict = product_service
        .patch_by_id(
            target.id(),
            ProductPatch::builder().price("0.99".parse::<Decimal>()?).build(),
            Some(Version::new()),
        )
        .await;
    println!("stale write: {:?}", conflict.err().expect("conflict"));

    // ========================================================================
    // 客户资源走同一套编排
    // ========================================================================

    let customer = customer_service
        .create(CustomerDraft::builder().name("Acme Taproom".to_string()).build())
        .await?;
    println!("created customer {} @ {}", customer.name, customer.id());

    let removed = customer_service.delete_by_id(customer.id()).await?;
    println!("customer deleted: {removed}");

    Ok(())
}
