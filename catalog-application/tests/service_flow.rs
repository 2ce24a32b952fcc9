//! 资源服务的端到端流程测试：基于内存存储走通五类操作
use catalog_application::error::AppError;
use catalog_application::{CustomerService, ProductService};
use catalog_domain::catalog::{
    Customer, CustomerDraft, CustomerFilter, CustomerPatch, Product, ProductCategory,
    ProductDraft, ProductFilter, ProductId, ProductPatch,
};
use catalog_domain::entity::Entity;
use catalog_domain::persist::MemoryRecordStore;
use catalog_domain::value_object::Version;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

type SharedStore = Arc<MemoryRecordStore<Product>>;

fn product_service() -> (SharedStore, ProductService<SharedStore>) {
    let store = Arc::new(MemoryRecordStore::<Product>::new());
    (store.clone(), ProductService::new(store))
}

fn draft(name: &str, category: ProductCategory, quantity: Option<u32>) -> ProductDraft {
    ProductDraft::builder()
        .name(name.to_string())
        .category(category)
        .code("8156089403".to_string())
        .price("4.99".parse::<Decimal>().unwrap())
        .maybe_quantity_on_hand(quantity)
        .build()
}

async fn seed(service: &ProductService<SharedStore>) {
    for (name, category, quantity) in [
        ("Galaxy Cat IPA", ProductCategory::Ipa, Some(122)),
        ("Snozzberry ipa", ProductCategory::Ipa, Some(80)),
        ("Mango Bobs", ProductCategory::Ale, Some(400)),
        ("Vanilla Java Porter", ProductCategory::Porter, Some(12)),
        ("Kentucky IPA Reserve", ProductCategory::Stout, Some(9)),
    ] {
        service.create(draft(name, category, quantity)).await.unwrap();
    }
}

#[tokio::test]
async fn create_then_patch_keeps_identity_and_bumps_version_once() {
    let (_store, service) = product_service();

    let created = service
        .create(
            ProductDraft::builder()
                .name("IPA Test".to_string())
                .category(ProductCategory::Ale)
                .code("123".to_string())
                .price("1.99".parse::<Decimal>().unwrap())
                .quantity_on_hand(10)
                .build(),
        )
        .await
        .unwrap();

    assert_ne!(created.id(), &ProductId::default());
    assert_eq!(created.version().value(), 0);
    assert!(created.created_at().is_some());

    let patched = service
        .patch_by_id(
            created.id(),
            ProductPatch::builder().name("IPA Test v2".to_string()).build(),
            None,
        )
        .await
        .unwrap()
        .expect("record exists");

    // 标识不变，版本恰好 +1，兄弟字段不受影响
    assert_eq!(patched.id(), created.id());
    assert_eq!(patched.version().value(), 1);
    assert_eq!(patched.name, "IPA Test v2");
    assert_eq!(patched.category, ProductCategory::Ale);
    assert_eq!(patched.code, "123");
    assert_eq!(patched.price, "1.99".parse::<Decimal>().unwrap());
    assert_eq!(patched.quantity_on_hand, Some(10));
}

#[tokio::test]
async fn create_with_blank_name_leaves_store_untouched() {
    let (store, service) = product_service();

    let err = service
        .create(draft("  ", ProductCategory::Ale, None))
        .await
        .unwrap_err();

    match err {
        AppError::Validation { field: "name", .. } => {}
        other => panic!("unexpected {other:?}"),
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn list_filters_by_name_case_insensitively() {
    let (_store, service) = product_service();
    seed(&service).await;

    let page = service
        .list(
            ProductFilter::builder().name("IPA".to_string()).build(),
            None,
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    assert!(
        page.items
            .iter()
            .all(|p| p.name.to_lowercase().contains("ipa"))
    );
}

#[tokio::test]
async fn combined_name_and_category_filter_narrows_by_conjunction() {
    let (_store, service) = product_service();
    seed(&service).await;

    let page = service
        .list(
            ProductFilter::builder()
                .name("IPA".to_string())
                .category(ProductCategory::Ipa)
                .build(),
            None,
            None,
            None,
        )
        .await
        .unwrap();

    // "Kentucky IPA Reserve" 名称命中但品类不符，被交集排除
    assert_eq!(page.total, 2);
    assert!(
        page.items
            .iter()
            .all(|p| p.category == ProductCategory::Ipa)
    );
}

#[tokio::test]
async fn hiding_inventory_clears_quantity_on_every_listed_record() {
    let (_store, service) = product_service();
    seed(&service).await;

    let concealed = service
        .list(ProductFilter::default(), None, None, Some(false))
        .await
        .unwrap();
    assert_eq!(concealed.total, 5);
    assert!(concealed.items.iter().all(|p| p.quantity_on_hand.is_none()));

    // 未指定开关时数量原样返回
    let plain = service
        .list(ProductFilter::default(), None, None, None)
        .await
        .unwrap();
    assert!(plain.items.iter().all(|p| p.quantity_on_hand.is_some()));

    let shown = service
        .list(ProductFilter::default(), None, None, Some(true))
        .await
        .unwrap();
    assert!(shown.items.iter().all(|p| p.quantity_on_hand.is_some()));
}

#[tokio::test]
async fn list_pages_with_fixed_name_ordering() {
    let (_store, service) = product_service();
    seed(&service).await;

    let first = service
        .list(ProductFilter::default(), Some(1), Some(2), None)
        .await
        .unwrap();
    assert_eq!(first.total, 5);
    assert_eq!(first.len(), 2);
    assert_eq!(first.page_index, 0);
    assert_eq!(first.total_pages(), 3);
    assert_eq!(first.items[0].name, "Galaxy Cat IPA");

    let last = service
        .list(ProductFilter::default(), Some(3), Some(2), None)
        .await
        .unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last.items[0].name, "Vanilla Java Porter");
}

#[tokio::test]
async fn update_replaces_every_field_including_clearing_quantity() {
    let (_store, service) = product_service();
    let created = service
        .create(draft("Galaxy Cat", ProductCategory::PaleAle, Some(140)))
        .await
        .unwrap();

    let updated = service
        .update_by_id(
            created.id(),
            ProductDraft::builder()
                .name("Galaxy Cat 2024".to_string())
                .category(ProductCategory::Ipa)
                .code("730057".to_string())
                .price("10.99".parse::<Decimal>().unwrap())
                .build(),
            None,
        )
        .await
        .unwrap()
        .expect("record exists");

    assert_eq!(updated.version().value(), 1);
    assert_eq!(updated.name, "Galaxy Cat 2024");
    // 候选未携带库存：全量更新清空数量，与补丁语义相对
    assert_eq!(updated.quantity_on_hand, None);
}

#[tokio::test]
async fn operations_on_missing_ids_return_absent_outcomes() {
    let (store, service) = product_service();
    seed(&service).await;
    let missing = ProductId::from(Uuid::new_v4());

    assert!(service.get_by_id(&missing).await.unwrap().is_none());
    assert!(
        service
            .update_by_id(&missing, draft("X", ProductCategory::Ale, None), None)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        service
            .patch_by_id(&missing, ProductPatch::default(), None)
            .await
            .unwrap()
            .is_none()
    );
    // 删除缺失目标：返回 false 且存量不变
    assert!(!service.delete_by_id(&missing).await.unwrap());
    assert_eq!(store.len(), 5);
}

#[tokio::test]
async fn delete_removes_record_and_subsequent_get_is_absent() {
    let (store, service) = product_service();
    let created = service
        .create(draft("Pinball Porter", ProductCategory::Porter, Some(144)))
        .await
        .unwrap();
    assert_eq!(store.len(), 1);

    assert!(service.delete_by_id(created.id()).await.unwrap());
    assert!(store.is_empty());
    assert!(service.get_by_id(created.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn stale_expected_version_is_rejected_without_write() {
    let (_store, service) = product_service();
    let created = service
        .create(draft("King Krush", ProductCategory::Ipa, Some(22)))
        .await
        .unwrap();

    // 第一次补丁将版本推进到 1
    service
        .patch_by_id(
            created.id(),
            ProductPatch::builder().quantity_on_hand(21).build(),
            Some(created.version()),
        )
        .await
        .unwrap()
        .expect("record exists");

    // 第二位调用方仍持有版本 0 的快照
    let err = service
        .patch_by_id(
            created.id(),
            ProductPatch::builder().name("King Krush v2".to_string()).build(),
            Some(Version::new()),
        )
        .await
        .unwrap_err();

    match err {
        AppError::Conflict {
            expected: 0,
            actual: 1,
        } => {}
        other => panic!("unexpected {other:?}"),
    }

    // 冲突的写入不落库
    let found = service.get_by_id(created.id()).await.unwrap().unwrap();
    assert_eq!(found.name, "King Krush");
    assert_eq!(found.version().value(), 1);
}

#[tokio::test]
async fn matching_expected_version_allows_replace() {
    let (_store, service) = product_service();
    let created = service
        .create(draft("Crank Tank", ProductCategory::Lager, Some(392)))
        .await
        .unwrap();

    let updated = service
        .update_by_id(
            created.id(),
            draft("Crank Tank Reserve", ProductCategory::Lager, Some(392)),
            Some(created.version()),
        )
        .await
        .unwrap()
        .expect("record exists");
    assert_eq!(updated.version().value(), 1);
    assert_eq!(updated.name, "Crank Tank Reserve");
}

#[tokio::test]
async fn customer_service_shares_the_same_orchestration() {
    let store = Arc::new(MemoryRecordStore::<Customer>::new());
    let service = CustomerService::new(store.clone());

    for name in ["Acme Taproom", "Globex Beverages", "Initech Bar"] {
        service
            .create(CustomerDraft::builder().name(name.to_string()).build())
            .await
            .unwrap();
    }

    let page = service
        .list(
            CustomerFilter::builder().name("acme".to_string()).build(),
            None,
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    let acme = &page.items[0];

    let renamed = service
        .patch_by_id(
            acme.id(),
            CustomerPatch::builder().name("Acme Taproom West".to_string()).build(),
            Some(acme.version()),
        )
        .await
        .unwrap()
        .expect("record exists");
    assert_eq!(renamed.name, "Acme Taproom West");
    assert_eq!(renamed.version().value(), 1);

    assert!(service.delete_by_id(acme.id()).await.unwrap());
    assert_eq!(store.len(), 2);
}
