use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use cursor_framework::{CharClass, Cursor, Predicate};
use regex::Regex;

// --- Data Generation ---

fn generate_english(size_kb: usize) -> String {
    let words = [
        "function",
        "let",
        "var",
        "const",
        "if",
        "else",
        "while",
        "return",
        "import",
        "export",
        "class",
        "interface",
    ];
    let mut s = String::with_capacity(size_kb * 1024);
    while s.len() < size_kb * 1024 {
        for w in words {
            s.push_str(w);
            s.push(' ');
            s.push_str("x_Variable");
            s.push_str(" = ");
            s.push_str("12345");
            s.push_str(";\n");
        }
    }
    s
}

fn generate_chinese(size_kb: usize) -> String {
    let words = [
        "定义", "变量", "如果", "否则", "循环", "返回", "类", "接口", "模块", "导入",
    ];
    let mut s = String::with_capacity(size_kb * 1024);
    while s.len() < size_kb * 1024 {
        for w in words {
            s.push_str(w);
            s.push(' ');
            s.push_str("变量名_甲");
            s.push_str(" = ");
            s.push_str("67890");
            s.push_str(";\n");
        }
    }
    s
}

// --- Scanners ---

/// Splits the input into words, numbers and punctuation using class names.
fn scan_by_class(source: &str) -> usize {
    let mut cursor = Cursor::new(source);
    let mut tokens = 0;
    while !cursor.is_eof() {
        if !cursor.read_while(CharClass::Digit).is_empty()
            || !cursor.read_while(CharClass::Alphabet).is_empty()
        {
            tokens += 1;
            continue;
        }
        if cursor.is(&["whitespace", "newline"]) {
            continue;
        }
        cursor.next();
        tokens += 1;
    }
    tokens
}

fn scan_by_callback(source: &str) -> usize {
    let mut cursor = Cursor::new(source);
    let mut tokens = 0;
    while !cursor.is_eof() {
        let word = cursor.read_while(Predicate::from_fn(|c, _| c.is_alphanumeric() || c == '_'));
        if word.is_empty() {
            cursor.next();
        }
        tokens += 1;
    }
    tokens
}

fn scan_by_pattern(source: &str, word: &Regex) -> usize {
    let mut cursor = Cursor::new(source);
    let mut tokens = 0;
    while !cursor.is_eof() {
        if cursor.read_while(word).is_empty() {
            cursor.next();
        }
        tokens += 1;
    }
    tokens
}

// --- Benchmarks ---

fn bench_cursor(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_read");

    let size_kb = 100;
    let english_text = generate_english(size_kb);
    let chinese_text = generate_chinese(size_kb);
    let word = Regex::new(r"\w").unwrap();

    group.throughput(Throughput::Bytes(english_text.len() as u64));
    group.bench_function("english_class_100kb", |b| {
        b.iter(|| scan_by_class(&english_text))
    });
    group.bench_function("english_callback_100kb", |b| {
        b.iter(|| scan_by_callback(&english_text))
    });
    group.bench_function("english_pattern_100kb", |b| {
        b.iter(|| scan_by_pattern(&english_text, &word))
    });

    group.throughput(Throughput::Bytes(chinese_text.len() as u64));
    group.bench_function("chinese_class_100kb", |b| {
        b.iter(|| scan_by_class(&chinese_text))
    });
    group.bench_function("chinese_callback_100kb", |b| {
        b.iter(|| scan_by_callback(&chinese_text))
    });

    group.finish();
}

criterion_group!(benches, bench_cursor);
criterion_main!(benches);
