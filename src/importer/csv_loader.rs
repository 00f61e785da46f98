// ==========================================
// 库存预警系统 - CSV 加载器实现
// ==========================================
// 职责: 读取库存 CSV 文件,产出 ItemRecord 序列
// 支持: CSV (.csv), 首行表头
// 红线: 加载器是核心的外部协作方,引擎只见内存记录序列
// ==========================================

use crate::domain::item::ItemRecord;
use crate::importer::error::ImportError;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::info;

// ==========================================
// CsvLoader - CSV 加载器
// ==========================================
pub struct CsvLoader;

impl CsvLoader {
    pub fn new() -> Self {
        Self
    }

    /// 加载库存记录
    ///
    /// # 参数
    /// - `file_path`: CSV 文件路径 (首行表头,列名与 ItemRecord 字段一致)
    ///
    /// # 返回
    /// - `Ok(Vec<ItemRecord>)`: 保持文件行序的记录序列
    /// - `Err(ImportError)`: 文件缺失/格式不支持/行解析失败 (行号从1计,不含表头)
    pub fn load(&self, file_path: &Path) -> Result<Vec<ItemRecord>, ImportError> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // 检查扩展名
        match file_path.extension() {
            Some(ext) if ext == "csv" => {}
            Some(ext) => {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ))
            }
            None => {
                return Err(ImportError::UnsupportedFormat(
                    file_path.display().to_string(),
                ))
            }
        }

        // 打开 CSV 文件
        let file = File::open(file_path)
            .map_err(|e| ImportError::FileReadError(e.to_string()))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        // 表头校验交给 serde 字段匹配;此处仅确认表头可读
        reader
            .headers()
            .map_err(|e| ImportError::HeaderParseError(e.to_string()))?;

        // 逐行反序列化,保持文件行序
        let mut records = Vec::new();
        for (row_idx, result) in reader.deserialize::<ItemRecord>().enumerate() {
            let record = result.map_err(|e| ImportError::RecordParseError {
                row: row_idx + 1,
                message: e.to_string(),
            })?;
            records.push(record);
        }

        info!(
            count = records.len(),
            file = %file_path.display(),
            "库存记录加载完成"
        );

        Ok(records)
    }
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}
