//! # olap-cube-store 使用案例
//!
//! 1. 启动 MemoryStorage
//! 2. 建立 Region 维度与层级
//! 3. 写入 / 读取 Cell
//! 4. 模拟延迟下的取消

use std::time::Duration;

use olap_cube_store::{
    cancel::CancelToken,
    config::EngineConfig,
    contract::Storage,
    meta::{Cell, Cube, Dimension, Element},
    storage::MemoryStorage,
};

#[tokio::main]
async fn main() -> olap_cube_store::common::Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    // =========================================================================
    // 1. 启动
    // =========================================================================
    println!("【1】启动 MemoryStorage ...");
    let engine = MemoryStorage::new(EngineConfig::immediate());
    let cx = CancelToken::new();
    println!("    policy = {:?}\n", engine.config().cancel_policy);

    // =========================================================================
    // 2. 维度与层级
    // =========================================================================
    println!("【2】Region: EMEA → {{UK, FR}} ...");
    engine.add_dimension(&cx, Dimension::new("Region")).await?;
    for name in ["EMEA", "UK", "FR"] {
        engine.add_element(&cx, Element::new("Region", name)).await?;
    }
    let emea = Element::new("Region", "EMEA");
    engine.add_component(&cx, emea.clone(), Element::new("Region", "UK")).await?;
    engine.add_component(&cx, emea.clone(), Element::new("Region", "FR")).await?;

    for child in engine.children(&cx, "Region", "EMEA").await? {
        println!("    {emea} → {child}");
    }
    match engine.add_dimension(&cx, Dimension::new("Region")).await {
        Err(e) => println!("    重复添加被拒绝: {e}\n"),
        Ok(())  => println!("    !! 重复添加未被拒绝\n"),
    }

    // =========================================================================
    // 3. Cell
    // =========================================================================
    println!("【3】写入 Sales[UK] = 100 ...");
    engine.add_cube(&cx, Cube::new("Sales", &["Region"])).await?;
    engine.add_cell(&cx, Cell::new("Sales", &["UK"], 100.0)).await?;
    println!("    Sales[UK]   = {}", engine.get_cell(&cx, "Sales", &["UK"]).await?.value);
    match engine.get_cell(&cx, "Sales", &["EMEA"]).await {
        Ok(c)  => println!("    Sales[EMEA] = {}", c.value),
        Err(e) => println!("    Sales[EMEA] → {e}"),
    }
    println!("    stats = {:?}\n", engine.stats());

    // =========================================================================
    // 4. 取消
    // =========================================================================
    println!("【4】SimulatedLatency(200ms) + 50ms 超时 ...");
    let slow = MemoryStorage::new(EngineConfig::simulated_latency(Duration::from_millis(200)));
    let short = CancelToken::with_timeout(Duration::from_millis(50));
    match slow.add_cube(&short, Cube::new("Budget", &["Region"])).await {
        Err(e) => println!("    {e}; Budget 存在? {}", slow.cube_exists(&cx, "Budget").await?),
        Ok(()) => println!("    !! 未超时"),
    }

    Ok(())
}
