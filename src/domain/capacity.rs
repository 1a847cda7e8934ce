// ==========================================
// 铁路装车编组决策支持系统 - 车底容量约束
// ==========================================
// 红线: 车底累计吨位不得超过车底总载重
// 用途: 贪心分配器的容量门控接口
// ==========================================

// ==========================================
// Trait: CapacityConstraint
// ==========================================
pub trait CapacityConstraint {
    /// 检查是否可追加吨位
    fn can_add_tonnage(&self, tonnage: f64) -> bool;

    /// 计算剩余容量
    fn remaining_capacity_t(&self) -> f64;

    /// 计算利用率（百分比）
    fn utilization_percent(&self) -> f64;
}
