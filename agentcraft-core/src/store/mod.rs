//! 资源状态容器
//!
//! One [`ResourceStore`] per resource kind, owned by the view layer and
//! mutated only through the named actions below.

use agentcraft_client::Resource;

/// List, flags and the record being edited for one resource kind.
#[derive(Debug, Clone)]
pub struct ResourceStore<R> {
    list: Vec<R>,
    loading: bool,
    modal_open: bool,
    edit_mode: bool,
    current: Option<R>,
    selected: usize,
    loaded: bool,
    last_error: Option<String>,
}

impl<R> Default for ResourceStore<R> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            loading: false,
            modal_open: false,
            edit_mode: false,
            current: None,
            selected: 0,
            loaded: false,
            last_error: None,
        }
    }
}

impl<R: Resource> ResourceStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    // ============ 读取 ============

    pub fn list(&self) -> &[R] {
        &self.list
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_edit(&self) -> bool {
        self.edit_mode
    }

    pub fn current(&self) -> Option<&R> {
        self.current.as_ref()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// 是否已成功加载过一次列表
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ============ 基础 actions ============

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_open(&mut self, open: bool) {
        self.modal_open = open;
    }

    pub fn set_edit_status(&mut self, edit: bool) {
        self.edit_mode = edit;
    }

    pub fn update_current_record(&mut self, record: R) {
        self.current = Some(record);
    }

    /// Swap in a freshly fetched list in one assignment.
    ///
    /// Selection is kept on the same id when it still exists, otherwise clamped.
    pub fn replace_list(&mut self, list: Vec<R>) {
        let selected_id = self.selected().map(Resource::id);
        self.list = list;
        self.loaded = true;
        self.last_error = None;
        self.selected = selected_id
            .and_then(|id| self.list.iter().position(|r| r.id() == id))
            .unwrap_or_else(|| self.selected.min(self.list.len().saturating_sub(1)));
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.last_error = Some(error.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    // ============ 组合 actions ============

    /// Reentrancy guard: refuses (returns `false`) while an operation is in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.loading {
            log::debug!("[{}] Operation refused: already loading", R::KIND);
            return false;
        }
        self.loading = true;
        true
    }

    /// 打开新建弹窗
    pub fn open_create(&mut self) {
        self.edit_mode = false;
        self.current = None;
        self.modal_open = true;
    }

    /// 打开编辑弹窗
    pub fn open_edit(&mut self, record: R) {
        self.edit_mode = true;
        self.current = Some(record);
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.edit_mode = false;
        self.current = None;
    }

    // ============ 选择 ============

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.list.is_empty() && self.selected < self.list.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.list.is_empty() {
            self.selected = self.list.len() - 1;
        }
    }

    /// 获取当前选中的记录
    pub fn selected(&self) -> Option<&R> {
        self.list.get(self.selected)
    }
}
