use biglot::{extract, render, ANALYTICS_GLOSSARY};

const EXPECTED: &str = "Predictive analytics
Cohort analysis
A/B testing results
Machine learning insights
Custom analytics

Phân tích dự đoán
Phân tích nhóm
Kết quả A/B testing
Thông tin từ học máy
Phân tích tùy chỉnh";

#[test]
fn renders_the_embedded_glossary() {
    let (keys, values) = extract(ANALYTICS_GLOSSARY);
    assert_eq!(5, keys.len());
    assert_eq!(5, values.len());
    assert_eq!(EXPECTED, render(&keys, &values));
}

#[test]
fn extract_then_render_is_deterministic() {
    let (keys1, values1) = extract(ANALYTICS_GLOSSARY);
    let (keys2, values2) = extract(ANALYTICS_GLOSSARY);
    assert_eq!(
        render(&keys1, &values1),
        render(&keys2, &values2)
    );
}
