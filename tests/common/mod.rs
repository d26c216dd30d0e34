//! 存储契约一致性测试套件
//!
//! 对任意 `Storage` 实现可用：传入一个每次返回全新实例的工厂。

#![allow(dead_code)]

use olap_cube_store::cancel::CancelToken;
use olap_cube_store::common::OlapError;
use olap_cube_store::contract::Storage;
use olap_cube_store::meta::{Cell, Cube, Dimension, Element};

pub async fn run_storage_suite<S, F>(factory: F)
where
    S: Storage,
    F: Fn() -> S,
{
    cubes_overwrite(&factory()).await;
    dimensions_are_unique(&factory()).await;
    elements_are_unique(&factory()).await;
    components_keep_order_and_reject_duplicates(&factory()).await;
    children_without_hierarchy_is_not_found(&factory()).await;
    cells_respect_coordinate_order(&factory()).await;
    cells_overwrite(&factory()).await;
    region_sales_scenario(&factory()).await;
    cancelled_token_is_rejected(&factory()).await;
}

pub async fn cubes_overwrite<S: Storage>(s: &S) {
    let cx = CancelToken::new();
    assert!(!s.cube_exists(&cx, "Sales").await.unwrap());
    assert_eq!(s.get_cube(&cx, "Sales").await.unwrap(), Cube::default());

    s.add_cube(&cx, Cube::new("Sales", &["Region"])).await.unwrap();
    s.add_cube(&cx, Cube::new("Sales", &["Region", "Year"])).await.unwrap();
    assert!(s.cube_exists(&cx, "Sales").await.unwrap());
    assert_eq!(
        s.get_cube(&cx, "Sales").await.unwrap(),
        Cube::new("Sales", &["Region", "Year"]),
    );
}

pub async fn dimensions_are_unique<S: Storage>(s: &S) {
    let cx = CancelToken::new();
    s.add_dimension(&cx, Dimension::new("Region")).await.unwrap();
    assert_eq!(
        s.add_dimension(&cx, Dimension::new("Region")).await,
        Err(OlapError::DimensionAlreadyExists("Region".into())),
    );
    assert_eq!(s.get_dimension(&cx, "Region").await.unwrap(), Dimension::new("Region"));
    assert!(s.dimension_exists(&cx, "Region").await.unwrap());

    assert!(!s.dimension_exists(&cx, "Year").await.unwrap());
    assert_eq!(
        s.get_dimension(&cx, "Year").await,
        Err(OlapError::DimensionNotFound("Year".into())),
    );
}

pub async fn elements_are_unique<S: Storage>(s: &S) {
    let cx = CancelToken::new();
    let uk = Element::new("Region", "UK");
    s.add_element(&cx, uk.clone()).await.unwrap();
    assert_eq!(s.get_element(&cx, "Region", "UK").await.unwrap(), uk);
    assert!(s.element_exists(&cx, "Region", "UK").await.unwrap());

    let err = s.add_element(&cx, uk.clone()).await.unwrap_err();
    assert!(err.is_already_exists());

    assert_eq!(
        s.get_element(&cx, "Region", "FR").await,
        Err(OlapError::ElementNotFound("Region".into(), "FR".into())),
    );
    assert!(!s.element_exists(&cx, "Product", "UK").await.unwrap());
}

pub async fn components_keep_order_and_reject_duplicates<S: Storage>(s: &S) {
    let cx = CancelToken::new();
    let emea = Element::new("Region", "EMEA");
    let kids = [Element::new("Region", "UK"), Element::new("Region", "FR")];

    s.add_element(&cx, emea.clone()).await.unwrap();
    for k in &kids {
        s.add_element(&cx, k.clone()).await.unwrap();
        s.add_component(&cx, emea.clone(), k.clone()).await.unwrap();
    }
    assert_eq!(
        s.add_component(&cx, emea.clone(), kids[0].clone()).await,
        Err(OlapError::ComponentAlreadyExists("Region/EMEA".into(), "Region/UK".into())),
    );

    assert_eq!(s.children(&cx, "Region", "EMEA").await.unwrap(), kids.to_vec());
    assert!(s.component_exists(&cx, "Region", "EMEA").await.unwrap());
    assert_eq!(s.get_component(&cx, "Region", "EMEA").await.unwrap(), emea);
}

pub async fn children_without_hierarchy_is_not_found<S: Storage>(s: &S) {
    let cx = CancelToken::new();
    s.add_element(&cx, Element::new("Region", "UK")).await.unwrap();
    assert!(!s.component_exists(&cx, "Region", "UK").await.unwrap());
    assert_eq!(
        s.children(&cx, "Region", "UK").await,
        Err(OlapError::ComponentNotFound("Region".into(), "UK".into())),
    );
    assert!(s.get_component(&cx, "Region", "UK").await.unwrap_err().is_not_found());
}

pub async fn cells_respect_coordinate_order<S: Storage>(s: &S) {
    let cx = CancelToken::new();
    s.add_cell(&cx, Cell::new("Sales", &["UK", "2024"], 42.0)).await.unwrap();
    assert_eq!(s.get_cell(&cx, "Sales", &["UK", "2024"]).await.unwrap().value, 42.0);
    assert_eq!(
        s.get_cell(&cx, "Sales", &["2024", "UK"]).await,
        Err(OlapError::CellNotFound("Sales".into(), vec!["2024".into(), "UK".into()])),
    );
}

pub async fn cells_overwrite<S: Storage>(s: &S) {
    let cx = CancelToken::new();
    for v in [1.0, 2.0, 3.0] {
        s.add_cell(&cx, Cell::new("Sales", &["UK"], v)).await.unwrap();
    }
    assert_eq!(s.get_cell(&cx, "Sales", &["UK"]).await.unwrap().value, 3.0);
}

pub async fn region_sales_scenario<S: Storage>(s: &S) {
    let cx = CancelToken::new();
    s.add_dimension(&cx, Dimension::new("Region")).await.unwrap();
    s.add_element(&cx, Element::new("Region", "EMEA")).await.unwrap();
    s.add_element(&cx, Element::new("Region", "UK")).await.unwrap();
    s.add_component(&cx, Element::new("Region", "EMEA"), Element::new("Region", "UK"))
        .await
        .unwrap();
    assert_eq!(
        s.children(&cx, "Region", "EMEA").await.unwrap(),
        vec![Element::new("Region", "UK")],
    );

    s.add_cube(&cx, Cube::new("Sales", &["Region"])).await.unwrap();
    s.add_cell(&cx, Cell::new("Sales", &["UK"], 100.0)).await.unwrap();
    assert_eq!(s.get_cell(&cx, "Sales", &["UK"]).await.unwrap().value, 100.0);
    assert!(matches!(
        s.get_cell(&cx, "Sales", &["EMEA"]).await,
        Err(OlapError::CellNotFound(..))
    ));
}

pub async fn cancelled_token_is_rejected<S: Storage>(s: &S) {
    let cx = CancelToken::new();
    cx.cancel();
    assert_eq!(s.add_cube(&cx, Cube::new("Sales", &[])).await, Err(OlapError::Canceled));
    assert_eq!(s.add_dimension(&cx, Dimension::new("Region")).await, Err(OlapError::Canceled));
    assert_eq!(s.get_cell(&cx, "Sales", &["UK"]).await, Err(OlapError::Canceled));

    let live = CancelToken::new();
    assert!(!s.cube_exists(&live, "Sales").await.unwrap());
    assert!(!s.dimension_exists(&live, "Region").await.unwrap());
}
