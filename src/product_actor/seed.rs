//! Fixed catalog loaded into every new store.

use crate::model::ProductCreate;

/// `(name, description, price, stock, category)` in ID order.
const MOCK_PRODUCTS: [(&str, &str, f64, u32, &str); 5] = [
    (
        "机械键盘",
        "Cherry MX 红轴机械键盘，87键紧凑布局",
        399.00,
        150,
        "电脑外设",
    ),
    (
        "无线鼠标",
        "人体工学设计，2.4G无线连接，续航持久",
        129.00,
        300,
        "电脑外设",
    ),
    (
        "显示器支架",
        "铝合金材质，支持17-32寸显示器，可旋转升降",
        259.00,
        80,
        "办公用品",
    ),
    (
        "降噪耳机",
        "主动降噪，蓝牙5.0，40小时续航",
        699.00,
        200,
        "音频设备",
    ),
    (
        "USB-C 扩展坞",
        "Type-C接口，支持HDMI/USB3.0/SD卡/网口扩展",
        189.00,
        120,
        "电脑配件",
    ),
];

/// The seed catalog as create payloads, in the order IDs are assigned.
pub fn mock_products() -> Vec<ProductCreate> {
    MOCK_PRODUCTS
        .iter()
        .map(|&(name, description, price, stock, category)| ProductCreate {
            name: name.to_string(),
            description: description.to_string(),
            price,
            stock,
            category: category.to_string(),
        })
        .collect()
}
