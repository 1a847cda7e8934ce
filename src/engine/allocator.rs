// ==========================================
// 铁路装车编组决策支持系统 - 贪心车底分配引擎
// ==========================================
// 红线: 车底累计吨位不得超过总载重
// 红线: 物料只能装入兼容车型
// ==========================================
// 职责: 优先级驱动的两轮贪心分配
// 输入: 订单 + 车底 + 堆场/装车点 + 兼容索引
// 输出: 非空的 RakeAllocationPlan 列表 + 未分配订单
// ==========================================
// 第一轮: 按优先级逐单开新车底（容量最接近者优先），
//         已用车底数达到 floor(车队 × 预留比例) 后停止
// 第二轮: 剩余订单按创建顺序拼入已有方案；
//         无可拼方案时启用预留车底
// ==========================================

use crate::domain::capacity::CapacityConstraint;
use crate::domain::inventory::{LoadingPoint, Stockyard};
use crate::domain::order::Order;
use crate::domain::plan::RakeAllocationPlan;
use crate::domain::rake::Rake;
use crate::engine::compatibility::CompatibilityIndex;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument};

// ==========================================
// 跳过原因
// ==========================================
pub mod skip_reason {
    pub const NO_COMPATIBLE_RAKE: &str = "NO_COMPATIBLE_RAKE";
    pub const NO_LOADING_POINT: &str = "NO_LOADING_POINT";
    pub const CAPACITY_EXCEEDED: &str = "CAPACITY_EXCEEDED";
    pub const RESERVATION_LIMIT_REACHED: &str = "RESERVATION_LIMIT_REACHED";
    pub const NO_FIT_AFTER_CONSOLIDATION: &str = "NO_FIT_AFTER_CONSOLIDATION";
}

/// 分配结果
#[derive(Debug, Clone)]
pub struct AllocationOutcome {
    /// 非空方案（按创建顺序）
    pub plans: Vec<RakeAllocationPlan>,
    /// 两轮后仍未上车底的订单（按优先级顺序）
    pub unassigned: Vec<(Order, String)>,
    /// 分配后的堆场工作副本（吨位已扣减）
    pub remaining_stockyards: Vec<Stockyard>,
}

impl AllocationOutcome {
    pub fn allocated_order_ids(&self) -> HashSet<&str> {
        self.plans
            .iter()
            .flat_map(|p| p.assigned_orders.iter().map(|a| a.order.order_id.as_str()))
            .collect()
    }
}

// ==========================================
// AllocationContext - 单次分配的工作状态
// ==========================================
// 每次运行独立持有：已用车底、待分配订单、堆场吨位副本、方案列表
struct AllocationContext<'a> {
    loading_points: &'a [LoadingPoint],
    stockyards: Vec<Stockyard>,
    used_rakes: HashSet<String>,
    pending: HashSet<String>,
    skip_reasons: HashMap<String, &'static str>,
    plans: Vec<RakeAllocationPlan>,
    allow_multi_destination: bool,
}

impl<'a> AllocationContext<'a> {
    fn new(
        orders: &[&Order],
        stockyards: &[Stockyard],
        loading_points: &'a [LoadingPoint],
        allow_multi_destination: bool,
    ) -> Self {
        Self {
            loading_points,
            stockyards: stockyards.to_vec(),
            used_rakes: HashSet::new(),
            pending: orders.iter().map(|o| o.order_id.clone()).collect(),
            skip_reasons: HashMap::new(),
            plans: Vec::new(),
            allow_multi_destination,
        }
    }

    fn is_pending(&self, order: &Order) -> bool {
        self.pending.contains(&order.order_id)
    }

    fn is_rake_used(&self, rake: &Rake) -> bool {
        self.used_rakes.contains(&rake.rake_id)
    }

    fn skip(&mut self, order: &Order, reason: &'static str) {
        debug!(order_id = %order.order_id, reason, "订单本轮未分配");
        self.skip_reasons.insert(order.order_id.clone(), reason);
    }

    /// 按物料查找来源堆场（工作副本中的第一个），返回其下标
    fn source_stockyard(&self, material_id: &str) -> Option<usize> {
        self.stockyards
            .iter()
            .position(|s| s.material_id == material_id)
    }

    /// 解析装车点：来源堆场 → 堆场所属装车点
    ///
    /// 只看物料，不看目的地/车底位置；多个堆场持有同一物料时取输入顺序第一个。
    fn resolve_loading_point(&self, order: &Order) -> Option<LoadingPoint> {
        let idx = self.source_stockyard(&order.material_id)?;
        let lp_id = &self.stockyards[idx].loading_point_id;
        self.loading_points
            .iter()
            .find(|lp| &lp.loading_point_id == lp_id)
            .cloned()
    }

    /// 为车底开新方案并标记为已用，返回方案下标
    fn open_plan(&mut self, rake: &Rake, loading_point: LoadingPoint, order: &Order) -> usize {
        debug!(
            rake_id = %rake.rake_id,
            loading_point_id = %loading_point.loading_point_id,
            destination = %order.destination,
            "开新车底方案"
        );
        self.plans.push(RakeAllocationPlan::open(
            rake.clone(),
            loading_point,
            &order.destination,
        ));
        self.used_rakes.insert(rake.rake_id.clone());
        self.plans.len() - 1
    }

    /// 订单落位：写入方案、移出待分配池、扣减来源堆场吨位
    fn accept(&mut self, plan_idx: usize, order: &Order) {
        let allow_multi = self.allow_multi_destination;
        let plan = &mut self.plans[plan_idx];
        plan.push_order(order, allow_multi);
        debug!(
            order_id = %order.order_id,
            rake_id = %plan.rake.rake_id,
            quantity_t = order.quantity_tonnes,
            total_tonnage_t = plan.total_tonnage,
            "订单上车底"
        );

        self.pending.remove(&order.order_id);
        self.skip_reasons.remove(&order.order_id);

        if let Some(idx) = self.source_stockyard(&order.material_id) {
            self.stockyards[idx].available_tonnage -= order.quantity_tonnes;
        }
    }
}

// ==========================================
// GreedyAllocator - 贪心车底分配引擎
// ==========================================
pub struct GreedyAllocator {
    reservation_ratio: f64,
}

impl GreedyAllocator {
    /// 构造函数
    ///
    /// # 参数
    /// - `reservation_ratio`: 第一轮可开车底占车队比例（默认 0.8）
    pub fn new(reservation_ratio: f64) -> Self {
        Self { reservation_ratio }
    }

    /// 第一轮可用车底上限 floor(车队规模 × 比例)
    pub fn reservation_limit(&self, fleet_size: usize) -> usize {
        (fleet_size as f64 * self.reservation_ratio).floor() as usize
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行两轮分配
    ///
    /// # 参数
    /// - `orders`: 订单（输入顺序）
    /// - `rakes`: 车底（输入顺序决定同等适配度时的选择）
    /// - `stockyards`: 堆场（只读，内部复制工作副本）
    /// - `loading_points`: 装车点
    /// - `index`: 兼容索引
    /// - `allow_multi_destination`: 是否记录次要目的地
    #[instrument(skip_all, fields(
        orders_count = orders.len(),
        rakes_count = rakes.len(),
        stockyards_count = stockyards.len()
    ))]
    pub fn allocate(
        &self,
        orders: &[Order],
        rakes: &[Rake],
        stockyards: &[Stockyard],
        loading_points: &[LoadingPoint],
        index: &CompatibilityIndex,
        allow_multi_destination: bool,
    ) -> AllocationOutcome {
        let sorted = sort_by_priority(orders);
        let mut ctx = AllocationContext::new(&sorted, stockyards, loading_points, allow_multi_destination);

        let reservation_limit = self.reservation_limit(rakes.len());
        self.priority_pass(&mut ctx, &sorted, rakes, index, reservation_limit);

        info!(
            plans_count = ctx.plans.len(),
            used_rakes = ctx.used_rakes.len(),
            reservation_limit,
            pending_count = ctx.pending.len(),
            "第一轮（优先级落位）完成"
        );

        self.consolidation_pass(&mut ctx, &sorted, rakes, index);

        info!(
            plans_count = ctx.plans.len(),
            used_rakes = ctx.used_rakes.len(),
            pending_count = ctx.pending.len(),
            "第二轮（拼车）完成"
        );

        let unassigned = sorted
            .iter()
            .filter(|o| ctx.is_pending(o))
            .map(|o| {
                let reason = ctx
                    .skip_reasons
                    .get(&o.order_id)
                    .copied()
                    .unwrap_or(skip_reason::NO_FIT_AFTER_CONSOLIDATION);
                ((*o).clone(), reason.to_string())
            })
            .collect();

        let plans = ctx.plans.into_iter().filter(|p| !p.is_empty()).collect();

        AllocationOutcome {
            plans,
            unassigned,
            remaining_stockyards: ctx.stockyards,
        }
    }

    /// 第一轮: 优先级落位
    fn priority_pass(
        &self,
        ctx: &mut AllocationContext<'_>,
        sorted: &[&Order],
        rakes: &[Rake],
        index: &CompatibilityIndex,
        reservation_limit: usize,
    ) {
        for order in sorted.iter().copied() {
            if !ctx.is_pending(order) {
                continue;
            }

            // 达到预留线后停止开新车底，剩余订单留给第二轮
            if ctx.used_rakes.len() >= reservation_limit {
                debug!(
                    used_rakes = ctx.used_rakes.len(),
                    reservation_limit, "已达到车底预留线，第一轮结束"
                );
                for rest in sorted.iter().filter(|o| ctx.pending.contains(&o.order_id)) {
                    ctx.skip_reasons
                        .entry(rest.order_id.clone())
                        .or_insert(skip_reason::RESERVATION_LIMIT_REACHED);
                }
                break;
            }

            let selected = best_fit_rake(
                rakes
                    .iter()
                    .filter(|r| !ctx.is_rake_used(r) && index.is_compatible(order, r)),
                order.quantity_tonnes,
            );
            let rake = match selected {
                Some(rake) => rake,
                None => {
                    ctx.skip(order, skip_reason::NO_COMPATIBLE_RAKE);
                    continue;
                }
            };

            let loading_point = match ctx.resolve_loading_point(order) {
                Some(lp) => lp,
                None => {
                    ctx.skip(order, skip_reason::NO_LOADING_POINT);
                    continue;
                }
            };

            let plan_idx = match ctx.plans.iter().position(|p| p.rake.rake_id == rake.rake_id) {
                Some(idx) => idx,
                None => ctx.open_plan(rake, loading_point, order),
            };

            // 放不下时不换车底重试；车底已标记为已用，留给第二轮拼车
            if ctx.plans[plan_idx].can_add_tonnage(order.quantity_tonnes) {
                ctx.accept(plan_idx, order);
            } else {
                ctx.skip(order, skip_reason::CAPACITY_EXCEEDED);
            }
        }
    }

    /// 第二轮: 拼车（含预留车底）
    fn consolidation_pass(
        &self,
        ctx: &mut AllocationContext<'_>,
        sorted: &[&Order],
        rakes: &[Rake],
        index: &CompatibilityIndex,
    ) {
        for order in sorted.iter().copied() {
            if !ctx.is_pending(order) {
                continue;
            }

            // 1) 已有方案，按创建顺序取第一个放得下且兼容的
            let existing = ctx.plans.iter().position(|p| {
                p.can_add_tonnage(order.quantity_tonnes) && index.is_compatible(order, &p.rake)
            });
            if let Some(plan_idx) = existing {
                ctx.accept(plan_idx, order);
                continue;
            }

            // 2) 预留车底解锁
            let reserved = best_fit_rake(
                rakes.iter().filter(|r| {
                    !ctx.is_rake_used(r)
                        && index.is_compatible(order, r)
                        && r.total_capacity_tonnes >= order.quantity_tonnes
                }),
                order.quantity_tonnes,
            );
            let Some(rake) = reserved else {
                if !ctx.skip_reasons.contains_key(&order.order_id) {
                    ctx.skip(order, skip_reason::NO_FIT_AFTER_CONSOLIDATION);
                }
                continue;
            };

            match ctx.resolve_loading_point(order) {
                Some(loading_point) => {
                    let plan_idx = ctx.open_plan(rake, loading_point, order);
                    ctx.accept(plan_idx, order);
                }
                None => ctx.skip(order, skip_reason::NO_LOADING_POINT),
            }
        }
    }
}

impl Default for GreedyAllocator {
    fn default() -> Self {
        Self::new(0.8)
    }
}

// ==========================================
// 辅助函数
// ==========================================

/// 按优先级升序稳定排序（1 最先；同优先级保持输入顺序）
pub fn sort_by_priority(orders: &[Order]) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by_key(|o| o.priority);
    sorted
}

/// 容量最接近订单吨位的车底；同等接近时取先出现者
pub fn best_fit_rake<'r, I>(candidates: I, quantity_tonnes: f64) -> Option<&'r Rake>
where
    I: Iterator<Item = &'r Rake>,
{
    candidates.min_by(|a, b| {
        let da = (a.total_capacity_tonnes - quantity_tonnes).abs();
        let db = (b.total_capacity_tonnes - quantity_tonnes).abs();
        da.total_cmp(&db)
    })
}
