pub mod common; // 公共的函数，不好分类，可以迁移到其它项目的可能性高
pub mod files; // 与文件相关：读取城市数据、写入JSON/CSV
pub mod http; // HTTP客户端、单个接口的探测
pub mod logger; // 日志初始化
pub mod models; // 数据结构
